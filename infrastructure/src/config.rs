use anyhow::Context;
use domain::locale::Locale;
use dotenvy::dotenv;
use shared::types::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const ENV_BASE_URL: &str = "MEDCHAT_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "MEDCHAT_TIMEOUT_SECS";
pub const ENV_LANG: &str = "MEDCHAT_LANG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// `None` lets a request run until the server or the network gives up.
    pub timeout: Option<Duration>,
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            locale: Locale::default(),
        }
    }
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    /// `overrides` is consulted first for every variable, so its values are
    /// the only ones validated when it supplies them.
    pub fn load<O>(overrides: O) -> Result<Self>
    where
        O: Fn(&str) -> Option<String>,
    {
        dotenv().ok();
        Self::from_lookup(|key| overrides(key).or_else(|| env::var(key).ok()))
    }

    /// Builds a config from an arbitrary variable source. Unset or blank
    /// variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_BASE_URL) {
            config.base_url = url.trim().to_string();
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            config.timeout = Some(parse_timeout(&secs).with_context(|| {
                format!("invalid {} value '{}'", ENV_TIMEOUT_SECS, secs)
            })?);
        }
        if let Some(lang) = get(ENV_LANG) {
            config.locale = lang
                .parse::<Locale>()
                .with_context(|| format!("invalid {} value", ENV_LANG))?;
        }
        Ok(config)
    }

    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/chat/", self.base_url.trim_end_matches('/'))
    }
}

/// Whole seconds, must be positive.
pub fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw.trim().parse()?;
    if secs == 0 {
        return Err(anyhow::anyhow!("timeout must be at least one second"));
    }
    Ok(Duration::from_secs(secs))
}
