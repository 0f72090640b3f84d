//! Ready event handler and presence rotation.
//!
//! The ready event fires when the bot completes the gateway handshake. It is
//! used to log connection information and to start the cosmetic presence
//! rotation, which runs as its own task for the rest of the process lifetime.

use std::time::Duration;

use serenity::all::{ActivityData, Context, Ready};
use tracing::info;

const PRESENCE_INTERVAL: Duration = Duration::from_secs(10);

/// Activity descriptors cycled as the bot's visible presence.
fn activities() -> Vec<ActivityData> {
    vec![
        ActivityData::playing("META's 👑 KINGDOM"),
        ActivityData::watching("!get <uid>"),
        ActivityData::playing("Example: !get 1722778962"),
    ]
}

/// Handles the ready event when the bot connects to Discord.
///
/// On the first ready of the process, spawns the presence rotation task.
/// `set_activity` is an infallible gateway enqueue, so the loop has no
/// failure path and runs until the process exits; it never blocks event
/// dispatch because it lives on its own task.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
/// - `start_presence` - False on reconnects, where the rotation already runs
pub async fn handle_ready(ctx: Context, ready: Ready, start_presence: bool) {
    info!("{} is connected to Discord", ready.user.name);

    if !start_presence {
        return;
    }

    tokio::spawn(async move {
        let activities = activities();
        let mut interval = tokio::time::interval(PRESENCE_INTERVAL);
        loop {
            for activity in &activities {
                interval.tick().await;
                ctx.set_activity(Some(activity.clone()));
            }
        }
    });
}
