//! API configuration

use domain_analysis::EngineConfig;
use serde::Deserialize;

/// Environment variable prefix, e.g. `FINANCE_API_PORT`
pub const ENV_PREFIX: &str = "FINANCE_API";

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Whether analysis results are cached
    pub cache_enabled: bool,
    /// Lifetime of a cached result in seconds
    pub cache_ttl_secs: u64,
    /// Most results held in the cache at once
    pub cache_max_entries: u64,
    /// Policies handed to the analysis engine
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            cache_enabled: true,
            cache_ttl_secs: 300,
            cache_max_entries: 1024,
            engine: EngineConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// Unset variables keep their defaults. Nested engine settings use a
    /// double underscore, e.g. `FINANCE_API_ENGINE__DEBT__MAX_SIMULATION_MONTHS`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port)?
            .set_default("log_level", defaults.log_level)?
            .set_default("cache_enabled", defaults.cache_enabled)?
            .set_default("cache_ttl_secs", defaults.cache_ttl_secs)?
            .set_default("cache_max_entries", defaults.cache_max_entries)?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
