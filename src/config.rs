use std::collections::HashSet;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;

/// Application configuration, loaded once at startup and immutable afterwards.
#[derive(Clone)]
pub struct Config {
    pub discord_token: String,

    /// Channels in which the `!get` command is permitted to execute.
    pub allowed_channel_ids: HashSet<u64>,

    /// Port the liveness endpoint binds to. Hosting platforms inject `PORT`.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("DISCORD_TOKEN").ok(),
            std::env::var("CHANNEL_ID").ok(),
            std::env::var("PORT").ok(),
        )
    }

    /// Builds the configuration from raw variable values.
    ///
    /// Separated from `from_env` so validation can be tested without
    /// mutating process-wide environment state.
    ///
    /// # Arguments
    /// - `discord_token` - Value of `DISCORD_TOKEN`, if set
    /// - `channel_id` - Value of `CHANNEL_ID`, if set
    /// - `port` - Value of `PORT`, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and well-formed
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or unparseable
    fn from_vars(
        discord_token: Option<String>,
        channel_id: Option<String>,
        port: Option<String>,
    ) -> Result<Self, AppError> {
        let discord_token =
            discord_token.ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let channel_id =
            channel_id.ok_or_else(|| ConfigError::MissingEnvVar("CHANNEL_ID".to_string()))?;
        let channel_id: u64 = channel_id
            .parse()
            .map_err(|_| ConfigError::InvalidChannelId(channel_id))?;

        let port = match port {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            discord_token,
            allowed_channel_ids: HashSet::from([channel_id]),
            port,
        })
    }

    /// Whether the command is permitted to run in the given channel.
    pub fn is_channel_allowed(&self, channel_id: u64) -> bool {
        self.allowed_channel_ids.contains(&channel_id)
    }
}
