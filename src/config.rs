//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Registration endpoint (authorization-code exchange)
    pub registration_url: String,
    /// Details-submission endpoint
    pub details_url: String,
    /// Device stream WebSocket endpoint
    pub stream_url: String,
    /// Where the file-backed session store lives
    pub session_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            registration_url: env::var("REGISTRATION_URL")
                .map_err(|_| ConfigError::Missing("REGISTRATION_URL"))?,
            details_url: env::var("DETAILS_URL")
                .map_err(|_| ConfigError::Missing("DETAILS_URL"))?,
            stream_url: env::var("STREAM_URL").map_err(|_| ConfigError::Missing("STREAM_URL"))?,
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("session.json")),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            registration_url: "http://localhost:8080/register".to_string(),
            details_url: "http://localhost:8080/details".to_string(),
            stream_url: "ws://localhost:8080/stream".to_string(),
            session_file: PathBuf::from("session.json"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
