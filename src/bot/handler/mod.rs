use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod message;
pub mod ready;

/// Discord bot event handler.
pub struct Handler {
    state: AppState,

    /// One-shot guard: a gateway reconnect fires `ready` again and must not
    /// spawn a second presence rotation task.
    presence_started: AtomicBool,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            presence_started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        let start_presence = !self.presence_started.swap(true, Ordering::SeqCst);
        ready::handle_ready(ctx, ready, start_presence).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, ctx, message).await;
    }
}
