use mock_server::{MockConfig, DEFAULT_API_KEY};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let api_key = std::env::var("NEWSAPI_MOCK_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
    let config = MockConfig::with_fixtures(&api_key)?;

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, articles = config.articles.len(), "mock news api listening");
    mock_server::run(listener, config).await?;
    Ok(())
}
