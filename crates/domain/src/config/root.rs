use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{IterationStrategy, ResolverConfig};

const LOCAL_CONFIG: &str = "rootwalk.toml";
const SYSTEM_CONFIG: &str = "/etc/rootwalk/config.toml";

pub const MAX_QUERY_TIMEOUT_SECS: u64 = 300;
pub const MAX_REFERRAL_DEPTH: usize = 64;

/// Main configuration structure for rootwalk
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Root servers, timeouts and referral bounds
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rootwalk.toml in current directory
    /// 3. /etc/rootwalk/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.resolver.query_timeout = timeout;
        }
        if let Some(strategy) = overrides.strategy {
            self.resolver.strategy = strategy;
        }
        if let Some(depth) = overrides.max_referral_depth {
            self.resolver.max_referral_depth = depth;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }
        if self.resolver.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }
        if self.resolver.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }
        if self.resolver.query_timeout > MAX_QUERY_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "Query timeout cannot exceed {} seconds",
                MAX_QUERY_TIMEOUT_SECS
            )));
        }
        if self.resolver.max_referral_depth == 0 {
            return Err(ConfigError::Validation(
                "Referral depth must allow at least one hop".to_string(),
            ));
        }
        if self.resolver.max_referral_depth > MAX_REFERRAL_DEPTH {
            return Err(ConfigError::Validation(format!(
                "Referral depth cannot exceed {}",
                MAX_REFERRAL_DEPTH
            )));
        }
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG).exists() {
            Some(LOCAL_CONFIG.to_string())
        } else if Path::new(SYSTEM_CONFIG).exists() {
            Some(SYSTEM_CONFIG.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub query_timeout: Option<u64>,
    pub strategy: Option<IterationStrategy>,
    pub max_referral_depth: Option<usize>,
}
