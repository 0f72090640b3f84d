//! Player-profile lookups against the external game-statistics API.

use serenity::async_trait;

use crate::error::fetch::FetchError;
use crate::model::profile::PlayerProfile;

/// Profile lookup endpoint; the uid is passed as a query value.
pub const PROFILE_API_URL: &str = "https://ff-community-api.vercel.app/ff.Info";

/// Source of player profiles.
///
/// Abstracted behind a trait so the command state machine can be exercised in
/// tests without network access.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, uid: &str) -> Result<PlayerProfile, FetchError>;
}

/// HTTP-backed profile source using the shared reqwest client from
/// application state.
#[derive(Clone)]
pub struct ProfileClient {
    http_client: reqwest::Client,
}

impl ProfileClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl ProfileSource for ProfileClient {
    /// Performs one GET against the profile endpoint.
    ///
    /// The uid is forwarded verbatim; the API itself decides what an invalid
    /// identifier means. A transport error, a non-success status, and an
    /// undecodable body are all reported as `FetchError` - the caller only
    /// distinguishes success from failure.
    async fn fetch_profile(&self, uid: &str) -> Result<PlayerProfile, FetchError> {
        let response = self
            .http_client
            .get(PROFILE_API_URL)
            .query(&[("uid", uid)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.json::<PlayerProfile>().await?)
    }
}
