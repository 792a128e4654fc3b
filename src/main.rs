use taskd_server::ServerConfig;
use taskd_store::TaskStore;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting task server");

    // The store lives for the whole process; tasks vanish on restart.
    let store = TaskStore::new();

    let config = ServerConfig::from_env();
    let port = config.port;
    let _handle = taskd_server::start(config, store)
        .await
        .expect("Failed to start server");

    tracing::info!(port = port, "Task server ready");

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for ctrl+c");

    tracing::info!("Shutting down");
}
