use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// the `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `CHANNEL_ID` is set but does not parse as an unsigned integer.
    #[error("CHANNEL_ID is not a valid channel id: {0}")]
    InvalidChannelId(String),

    /// `PORT` is set but does not parse as a port number.
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}
