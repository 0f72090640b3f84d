//! The `!get` command state machine.
//!
//! One invocation runs authorize -> fetch -> compose with no state shared
//! across invocations. Delivery (placeholder send, edit-in-place) stays with
//! the Discord handler in `bot::handler::message`; this module decides what
//! the final reply is.

use tracing::error;

use crate::config::Config;
use crate::model::profile::PlayerProfile;
use crate::service::profile::ProfileSource;

/// Reply for channels outside the allow-set.
pub const REJECTED_REPLY: &str = "This command can only be used in specific channels.";

/// Reply when the profile fetch fails for any reason. Transient and permanent
/// failures are deliberately indistinguishable to the user.
pub const FAILED_REPLY: &str =
    "❌ Sorry, there was an issue fetching data. Please try again later.";

/// Guidance for a missing uid argument.
pub const USAGE_REPLY: &str = "❌ Please use: `!get <uid>`\nExample: `!get 1722778962`";

/// Final reply for one `!get` invocation.
#[derive(Debug)]
pub enum GetReply {
    /// The invoking channel is not in the allow-set. The fetcher is never
    /// consulted on this path.
    Rejected,

    /// The fetch failed; the placeholder becomes the fixed failure text.
    Failed,

    /// The profile was fetched and is ready to compose into an embed.
    Profile(Box<PlayerProfile>),
}

/// Runs authorization and fetch for one invocation.
///
/// Fetch failures are logged here and collapsed into `GetReply::Failed`;
/// nothing propagates to the caller, so a failing API call can never take
/// down the event loop.
pub async fn resolve<S: ProfileSource>(
    source: &S,
    config: &Config,
    channel_id: u64,
    uid: &str,
) -> GetReply {
    if !config.is_channel_allowed(channel_id) {
        return GetReply::Rejected;
    }

    match source.fetch_profile(uid).await {
        Ok(profile) => GetReply::Profile(Box::new(profile)),
        Err(e) => {
            error!("Error fetching profile info for uid {}: {}", uid, e);
            GetReply::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use reqwest::StatusCode;
    use serenity::async_trait;

    use super::*;
    use crate::error::fetch::FetchError;

    /// Profile source that counts invocations and can be told to fail.
    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProfileSource for CountingSource {
        async fn fetch_profile(&self, _uid: &str) -> Result<PlayerProfile, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(FetchError::Status(StatusCode::NOT_FOUND))
            } else {
                Ok(PlayerProfile::default())
            }
        }
    }

    fn config_allowing(channel_id: u64) -> Config {
        Config {
            discord_token: "token".to_string(),
            allowed_channel_ids: HashSet::from([channel_id]),
            port: 8080,
        }
    }

    /// Tests that a disallowed channel is rejected before the fetch.
    ///
    /// Verifies that the fetcher is never invoked for a channel outside the
    /// allow-set.
    ///
    /// Expected: GetReply::Rejected with fetch call count 0
    #[tokio::test]
    async fn rejects_disallowed_channel_without_fetching() {
        let source = CountingSource::new(false);
        let config = config_allowing(42);

        let reply = resolve(&source, &config, 99, "1722778962").await;

        assert!(matches!(reply, GetReply::Rejected));
        assert_eq!(source.call_count(), 0);
    }

    /// Tests that a failing fetch collapses into the failure reply.
    ///
    /// Expected: GetReply::Failed after exactly one fetch attempt
    #[tokio::test]
    async fn failing_fetch_becomes_failure_reply() {
        let source = CountingSource::new(true);
        let config = config_allowing(42);

        let reply = resolve(&source, &config, 42, "1722778962").await;

        assert!(matches!(reply, GetReply::Failed));
        assert_eq!(source.call_count(), 1);
    }

    /// Tests the success path.
    ///
    /// Expected: GetReply::Profile carrying the fetched document
    #[tokio::test]
    async fn successful_fetch_yields_profile() {
        let source = CountingSource::new(false);
        let config = config_allowing(42);

        let reply = resolve(&source, &config, 42, "1722778962").await;

        assert!(matches!(reply, GetReply::Profile(_)));
        assert_eq!(source.call_count(), 1);
    }
}
