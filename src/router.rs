use axum::{routing::get, Router};

use crate::state::AppState;

/// Static confirmation used by external process supervisors.
///
/// Reports only that the process is serving HTTP; a stalled or disconnected
/// gateway session is not reflected here. Best-effort liveness, not a
/// correctness signal.
async fn home() -> &'static str {
    "Discord bot is running!"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the liveness response body.
    ///
    /// Expected: the fixed confirmation string
    #[tokio::test]
    async fn home_reports_running() {
        assert_eq!(home().await, "Discord bot is running!");
    }
}
