use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use market_proxy::{config::Config, router::create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = Config::from_env()?;
    info!(data_hub_url = %config.data_hub_url, app_env = ?config.app_env, "Configuration loaded");

    // Build our application with routes
    let host: std::net::IpAddr = config
        .host
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid HOST: {}", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    let app = create_router(config).await?;

    // Run our application
    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
