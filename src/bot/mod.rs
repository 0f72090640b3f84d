//! Discord bot integration.
//!
//! This module wires the serenity client into the application: the event
//! handler dispatches gateway events to per-event handler modules, and
//! `start` builds and runs the client. The client is started eagerly at boot
//! in its own tokio task so the liveness endpoint can occupy the main task.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild availability
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read message bodies for prefix commands (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
