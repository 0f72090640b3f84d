//! Application state shared across the bot handlers and the web endpoint.
//!
//! The state is initialized once during startup and then cloned wherever it
//! is needed: into the Discord event handler and into the Axum router. All
//! fields are cheap to clone - `reqwest::Client` is reference-counted
//! internally and `Config` is a handful of small values.

use crate::config::Config;
use crate::service::profile::ProfileClient;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration loaded at startup.
    pub config: Config,

    /// Profile source backed by the shared HTTP client. Reusing one client
    /// across commands pools connections to the external API.
    pub profile: ProfileClient,
}

impl AppState {
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        Self {
            config,
            profile: ProfileClient::new(http_client),
        }
    }
}
