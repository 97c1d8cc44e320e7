use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";
const DEFAULT_LAST_CHECKED_DIR: &str = "/data";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub username: String,
    pub password: String,
    pub receiver: String,
    pub relay: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub archive_url: String,
    pub api_token: String,
    pub email: EmailConfig,
    pub last_checked_dir: PathBuf,
    pub watch_interval: Option<Duration>,
}

impl Config {
    /// Build the configuration from the environment. The API token defaults
    /// to empty, which denies every check request.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            archive_url: require("ARCHIVE_URL")?,
            api_token: env::var("API_TOKEN").unwrap_or_default(),
            email: EmailConfig {
                username: require("EMAIL_USERNAME")?,
                password: require("EMAIL_PASSWORD")?,
                receiver: require("RECEIVER_EMAIL")?,
                relay: env::var("SMTP_RELAY").unwrap_or_else(|_| DEFAULT_SMTP_RELAY.to_string()),
            },
            last_checked_dir: env::var("LAST_CHECKED_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LAST_CHECKED_DIR)),
            watch_interval: parse_watch_interval(env::var("WATCH_INTERVAL_SECS").ok()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Zero, unset or unparseable means the periodic check stays off and the
/// endpoint-driven flow is the only trigger.
fn parse_watch_interval(raw: Option<String>) -> Option<Duration> {
    let raw = raw?;
    match raw.parse::<u64>() {
        Ok(0) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            tracing::warn!("Ignoring invalid WATCH_INTERVAL_SECS value {:?}", raw);
            None
        }
    }
}
