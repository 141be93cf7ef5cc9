//! Golf Caddy relay - server binary

use std::net::SocketAddr;

use golf_caddy_backend::{create_app, init_tracing, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    init_tracing();

    // Load configuration
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(".env file loaded from {}", path.display()),
        Err(e) => tracing::warn!("Could not load .env file: {}", e),
    }

    let config = Config::load()?;

    tracing::info!("Starting Golf Caddy server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        weather_key = config.weather.configured_key().is_some(),
        openai_key = config.openai.configured_key().is_some(),
        "API keys configured"
    );
    if config.weather.configured_key().is_none() || config.openai.configured_key().is_none() {
        tracing::warn!("Add your API keys to the .env file to enable weather and advice");
    }

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));

    // Build application
    let app = create_app(AppState::new(config));

    // Start server
    tracing::info!("Golf Caddy server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
