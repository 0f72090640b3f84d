//! Discord client construction and startup.

use serenity::all::{Client, GatewayIntents};
use tracing::info;

use crate::bot::handler::Handler;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the Discord client with the event handler wired in.
///
/// # Arguments
/// - `state` - Application state injected into the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client initialization failed
pub async fn init_bot(state: AppState) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the
    // Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let token = state.config.discord_token.clone();
    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Starts the Discord client.
///
/// Should be called from within a spawned task since it blocks until the bot
/// shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
