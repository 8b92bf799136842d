use crate::errors::{FinderError, FinderResult};

/// Feed polled when no URL is given on the command line.
pub const DEFAULT_FEED_URL: &str = "https://www.khon2.com/top-stories/feed/";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> FinderResult<Self> {
        dotenvy::dotenv().ok();

        let feed_url =
            std::env::var("FEEDFINDER_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());

        let timeout_secs = match std::env::var("FEEDFINDER_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                FinderError::Config(format!(
                    "FEEDFINDER_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            feed_url,
            timeout_secs,
        })
    }
}
