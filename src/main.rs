use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_relay::config;
use session_relay::RelayServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "session_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("session-relay v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration (defaults, optional RELAY_CONFIG file, PORT override)
    let server = RelayServer::new(config::from_env()?);
    let config = server.config();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        port = config.listener.port,
        upstream = %config.upstream.base_url,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener =
        TcpListener::bind((config.listener.bind_address.as_str(), config.listener.port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
