//! Error types for the application.
//!
//! `AppError` is the top-level type returned by startup and wiring code. It
//! aggregates the domain-specific errors via `#[from]` conversions. Failures
//! that occur while handling a single command never travel through this type:
//! they are caught at the call site, logged, and converted into a fixed
//! user-facing reply (see `service::get`).

pub mod config;
pub mod fetch;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal: the process refuses to start without its required
    /// configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error binding or serving the liveness endpoint.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
