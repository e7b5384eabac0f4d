use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EnkaError;

/// Default UI asset base URL.
pub const DEFAULT_BASE_URL: &str = "https://enka.network/ui";
/// Default profile API base URL.
pub const DEFAULT_API_URL: &str = "https://enka.network/api";
/// Default lifetime of a resolved player record (1 hour).
pub const DEFAULT_CACHE_DURATION: Duration = Duration::from_secs(60 * 60);
/// Default `User-Agent` sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "enka-asset-wrapper/1.0.0";

/// Library configuration.
///
/// All fields have defaults matching the public Enka endpoints. Override
/// them with [`ConfigUpdate`] or load them from the environment with
/// [`EnkaConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnkaConfig {
    /// Base URL for character icons and name cards.
    pub base_url: String,
    /// Base URL of the profile API.
    pub api_url: String,
    /// Default TTL for resolved player records.
    pub cache_duration: Duration,
    /// When `false` the player cache never stores or returns anything.
    pub enable_cache: bool,
    pub user_agent: String,
}

impl Default for EnkaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            cache_duration: DEFAULT_CACHE_DURATION,
            enable_cache: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Partial override of [`EnkaConfig`]. `None` fields keep their current
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub cache_duration: Option<Duration>,
    #[serde(default)]
    pub enable_cache: Option<bool>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl EnkaConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                     |
    /// |----------------------------|-----------------------------|
    /// | `ENKA_BASE_URL`            | `https://enka.network/ui`   |
    /// | `ENKA_API_URL`             | `https://enka.network/api`  |
    /// | `ENKA_CACHE_DURATION_SECS` | `3600`                      |
    /// | `ENKA_ENABLE_CACHE`        | `true`                      |
    /// | `ENKA_USER_AGENT`          | `enka-asset-wrapper/1.0.0`  |
    pub fn from_env() -> Result<Self, EnkaError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through
    /// `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnkaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_duration = lookup("ENKA_CACHE_DURATION_SECS")
            .map(|v| {
                v.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                    EnkaError::InvalidConfig(format!(
                        "ENKA_CACHE_DURATION_SECS must be a whole number of seconds, got {v:?}"
                    ))
                })
            })
            .transpose()?;

        let enable_cache = lookup("ENKA_ENABLE_CACHE")
            .map(|v| parse_bool(&v))
            .transpose()?;

        let update = ConfigUpdate {
            base_url: lookup("ENKA_BASE_URL"),
            api_url: lookup("ENKA_API_URL"),
            cache_duration,
            enable_cache,
            user_agent: lookup("ENKA_USER_AGENT"),
        };

        Self::default().merged(update)
    }

    /// Return a copy with `update` applied, validated.
    ///
    /// `self` is left untouched so a rejected update never leaves a half
    /// applied configuration behind.
    pub fn merged(&self, update: ConfigUpdate) -> Result<Self, EnkaError> {
        let mut next = self.clone();
        if let Some(base_url) = update.base_url {
            next.base_url = base_url;
        }
        if let Some(api_url) = update.api_url {
            next.api_url = api_url;
        }
        if let Some(cache_duration) = update.cache_duration {
            next.cache_duration = cache_duration;
        }
        if let Some(enable_cache) = update.enable_cache {
            next.enable_cache = enable_cache;
        }
        if let Some(user_agent) = update.user_agent {
            next.user_agent = user_agent;
        }
        next.normalized()
    }

    /// Strip trailing slashes from both URLs, then validate.
    ///
    /// Every config that reaches a running client goes through here, so
    /// URL joins never produce `//`.
    pub fn normalized(mut self) -> Result<Self, EnkaError> {
        self.base_url = trim_trailing_slash(self.base_url);
        self.api_url = trim_trailing_slash(self.api_url);
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), EnkaError> {
        for (name, url) in [("base_url", &self.base_url), ("api_url", &self.api_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(EnkaError::InvalidConfig(format!(
                    "{name} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        if self.cache_duration.is_zero() {
            return Err(EnkaError::InvalidConfig(
                "cache_duration must be greater than zero".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(EnkaError::InvalidConfig("user_agent must not be empty".into()));
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool, EnkaError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(EnkaError::InvalidConfig(format!(
            "ENKA_ENABLE_CACHE must be a boolean, got {value:?}"
        ))),
    }
}

fn trim_trailing_slash(url: String) -> String {
    match url.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => url,
    }
}
