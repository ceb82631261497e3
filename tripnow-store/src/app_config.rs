use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub refresh: RefreshConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// JSON file backing the durable key-value store
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshConfig {
    pub interval_seconds: u64,
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds.max(1))
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::with_defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `TRIPNOW_API__BASE_URL=https://api.example.com`
            .add_source(config::Environment::with_prefix("TRIPNOW").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    fn with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("api.base_url", "http://localhost:5000/api")?
            .set_default("api.timeout_seconds", 10)?
            .set_default("storage.path", ".tripnow/storage.json")?
            .set_default("refresh.interval_seconds", 20)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5000/api".to_string(),
                timeout_seconds: 10,
            },
            storage: StorageConfig {
                path: PathBuf::from(".tripnow/storage.json"),
            },
            refresh: RefreshConfig { interval_seconds: 20 },
        }
    }
}
