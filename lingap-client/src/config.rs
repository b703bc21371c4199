use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client configuration loaded from YAML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiSettings,
    pub cache: CacheSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// How long a fetched patient detail stays valid, in seconds.
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { ttl_secs: 60 }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = if let Some(path) = config_path {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };

        if let Ok(base_url) = std::env::var("LINGAP_BASE_URL") {
            config.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("LINGAP_TIMEOUT_SECS")
            && let Ok(secs) = timeout.parse()
        {
            config.api.timeout_secs = secs;
        }

        if let Ok(ttl) = std::env::var("LINGAP_CACHE_TTL_SECS")
            && let Ok(secs) = ttl.parse()
        {
            config.cache.ttl_secs = secs;
        }

        if let Ok(level) = std::env::var("LINGAP_LOG") {
            config.log.level = level;
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }
}
