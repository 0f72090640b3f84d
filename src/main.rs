mod bot;
mod config;
mod error;
mod model;
mod router;
mod service;
mod state;
mod util;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(config.clone(), reqwest::Client::new());

    // Start the Discord bot eagerly in its own task; the gateway connection
    // blocks that task until shutdown.
    let client = bot::start::init_bot(state.clone()).await?;
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(client).await {
            error!("Discord bot error: {}", e);
        }
    });

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Liveness endpoint listening on {}", addr);

    let app = router::router().with_state(state);
    axum::serve(listener, app).await?;

    Ok(())
}
