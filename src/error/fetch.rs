use reqwest::StatusCode;
use thiserror::Error;

/// Failure fetching a player profile from the external API.
///
/// Transport errors, non-success statuses, and undecodable bodies all end up
/// here; the command handler only distinguishes success from failure when
/// replying to the user, so no finer taxonomy is carried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, timeout, connection reset) or a JSON
    /// body that could not be decoded.
    #[error("profile request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("profile request returned status {0}")]
    Status(StatusCode),
}
