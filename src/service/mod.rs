//! Business logic between the Discord event handlers and the outside world.
//!
//! - `profile` - HTTP fetch of player profiles from the external API
//! - `get` - the `!get` command state machine (authorize, fetch)
//! - `embed` - composition of the profile reply embed

pub mod embed;
pub mod get;
pub mod profile;
