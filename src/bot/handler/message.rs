//! Message event handler: prefix command parsing and reply delivery.
//!
//! The `!get` flow replies in stages: authorization failures get a standalone
//! rejection, everything else goes through a placeholder message that is
//! edited in place with the final result. Discord API failures during
//! send/edit are logged and swallowed - nothing here may crash the event
//! loop.

use std::time::Duration;

use serenity::all::{Context, EditMessage, Message};
use tracing::{error, warn};

use crate::service::{embed, get};
use crate::state::AppState;

/// How long the usage guidance stays up before self-deleting.
const USAGE_DELETE_AFTER: Duration = Duration::from_secs(15);

/// Parsed form of an inbound message the bot reacts to.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// `!get`, with the uid argument when one was supplied. Trailing words
    /// beyond the uid are ignored.
    Get { uid: Option<String> },
}

impl Command {
    /// Parses a raw message body; anything that is not a recognized prefix
    /// command is `None`.
    pub fn parse(content: &str) -> Option<Self> {
        let mut words = content.split_whitespace();
        match words.next()? {
            "!get" => Some(Self::Get {
                uid: words.next().map(str::to_string),
            }),
            _ => None,
        }
    }
}

/// Handles a message created in a channel the bot can see.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(Command::Get { uid }) = Command::parse(&message.content) else {
        return;
    };

    match uid {
        Some(uid) => run_get(state, &ctx, &message, &uid).await,
        None => send_usage(&ctx, &message).await,
    }
}

/// Runs the `!get` reply flow for one invocation.
async fn run_get(state: &AppState, ctx: &Context, message: &Message, uid: &str) {
    let channel_id = message.channel_id.get();

    // The rejection reply stands alone, so authorization is checked before
    // the placeholder the other outcomes edit in place.
    if !state.config.is_channel_allowed(channel_id) {
        if let Err(e) = message.channel_id.say(&ctx.http, get::REJECTED_REPLY).await {
            error!("Failed to send rejection reply: {}", e);
        }
        return;
    }

    let mut placeholder = match message
        .channel_id
        .say(&ctx.http, format!("🔍 Fetching details for UID {}...", uid))
        .await
    {
        Ok(sent) => sent,
        Err(e) => {
            error!("Failed to send placeholder reply: {}", e);
            return;
        }
    };

    let edit = match get::resolve(&state.profile, &state.config, channel_id, uid).await {
        get::GetReply::Rejected => EditMessage::new().content(get::REJECTED_REPLY),
        get::GetReply::Failed => EditMessage::new().content(get::FAILED_REPLY),
        get::GetReply::Profile(profile) => EditMessage::new()
            .content("")
            .embed(embed::build_profile_embed(&profile, uid)),
    };

    if let Err(e) = placeholder.edit(&ctx.http, edit).await {
        error!("Failed to edit placeholder reply: {}", e);
    }
}

/// Replies with usage guidance that deletes itself after a fixed delay.
async fn send_usage(ctx: &Context, message: &Message) {
    let guidance = match message.channel_id.say(&ctx.http, get::USAGE_REPLY).await {
        Ok(sent) => sent,
        Err(e) => {
            error!("Failed to send usage guidance: {}", e);
            return;
        }
    };

    let http = ctx.http.clone();
    tokio::spawn(async move {
        tokio::time::sleep(USAGE_DELETE_AFTER).await;
        if let Err(e) = guidance.delete(&http).await {
            warn!("Failed to delete usage guidance: {}", e);
        }
    });
}
