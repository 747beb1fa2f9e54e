// crates/profile/src/infrastructure/imgbb/imgbb_config.rs

use std::time::Duration;

pub const IMGBB_API_KEY_VAR: &str = "IMGBB_API_KEY";
pub const IMGBB_ENDPOINT_VAR: &str = "IMGBB_ENDPOINT";
pub const IMGBB_TIMEOUT_VAR: &str = "IMGBB_TIMEOUT";

pub const DEFAULT_IMGBB_ENDPOINT: &str = "https://api.imgbb.com/1/upload";

/// Sans clé, le service démarre quand même : seuls les uploads échouent.
#[derive(Debug, Clone, PartialEq)]
pub struct ImgbbConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ImgbbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_IMGBB_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ImgbbConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            api_key: lookup(IMGBB_API_KEY_VAR).filter(|k| !k.trim().is_empty()),
            endpoint: lookup(IMGBB_ENDPOINT_VAR).unwrap_or(defaults.endpoint),
            timeout: lookup(IMGBB_TIMEOUT_VAR)
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
