use std::time::Duration;

use eyre::WrapErr;

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) port: u16,
    pub(crate) ytmusic_language: String,
    pub(crate) ytmusic_location: String,
    pub(crate) upstream_timeout: Duration,
}

impl Config {
    pub(crate) fn from_env() -> eyre::Result<Self> {
        let port = std::env::var("KARAOKE_SEARCH_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .wrap_err("KARAOKE_SEARCH_PORT must be a valid u16")?;
        let ytmusic_language =
            std::env::var("YTMUSIC_LANGUAGE").unwrap_or_else(|_| "ja".to_string());
        let ytmusic_location =
            std::env::var("YTMUSIC_LOCATION").unwrap_or_else(|_| "JP".to_string());
        let upstream_timeout_secs = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .wrap_err("UPSTREAM_TIMEOUT_SECS must be a valid u64")?;

        Ok(Self {
            port,
            ytmusic_language,
            ytmusic_location,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        })
    }
}
