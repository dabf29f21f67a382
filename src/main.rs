use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use wikipedia_agent::{
    AppState,
    api::routes::create_router,
    config::{self, Config},
    wiki::WikipediaClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // Create application state with the Wikipedia-backed provider
    let app_state = AppState {
        provider: Arc::new(WikipediaClient::new(&config.language)),
    };

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener; failing to bind is fatal
    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!(
        version = config::version(),
        addr = %server_addr,
        lang = %config.language,
        "wikipedia-agent listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
