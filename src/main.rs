use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, Level};

use bytesmith::{
    api::{create_router, router::AppState},
    application::use_cases::GenerateFileUseCase,
    domain::profiles::ProfileCatalog,
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting bytesmith service");

    // Load configuration
    let config = Config::from_env();
    config.validate().map_err(anyhow::Error::msg)?;
    info!("Configuration loaded and validated");

    // Build the immutable profile catalog once and inject it
    let catalog = Arc::new(ProfileCatalog::builtin());
    info!(profiles = catalog.len(), "Profile catalog initialized");

    let generate_use_case = Arc::new(GenerateFileUseCase::new(
        Arc::clone(&catalog),
        config.max_file_size_bytes,
    ));

    // Create app state and router
    let state = AppState {
        generate_use_case,
        stream_buffer_chunks: config.stream_buffer_chunks,
    };
    let app = create_router(state);

    // Start server
    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
