//! # PSOR Configuration
//!
//! Layered configuration shared by every remediation plugin.
//!
//! ## Hierarchy
//! 1. Default values (plugins behave as documented with no file present)
//! 2. YAML file: `$PSOR_CONFIG` when set, otherwise `config/psor.yaml` if it exists
//! 3. `PSOR_*` environment variables, `__` separating nested keys
//!    (e.g. `PSOR_TICKETING__PROJECT_KEY=OPS`)

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod prevention;
mod telemetry;
mod ticketing;
mod validation;

pub use error::ConfigError;
pub use prevention::EndpointConfig;
pub use prevention::FirewallConfig;
pub use telemetry::TelemetryConfig;
pub use telemetry::DEFAULT_LEVEL;
pub use ticketing::TicketingConfig;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "PSOR_CONFIG";

/// File merged when `PSOR_CONFIG` is unset and the file exists.
pub const DEFAULT_CONFIG_FILE: &str = "config/psor.yaml";

const ENV_PREFIX: &str = "PSOR_";

/// Top‑level configuration container for all plugins.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct PsorConfig {
    /// Logging parameters.
    #[validate(nested)]
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Firewall safety policy.
    #[validate(nested)]
    #[serde(default)]
    pub firewall: FirewallConfig,

    /// Endpoint isolation safety policy.
    #[validate(nested)]
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Follow-up ticket parameters.
    #[validate(nested)]
    #[serde(default)]
    pub ticketing: TicketingConfig,
}

impl PsorConfig {
    /// Load configuration from the default locations and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(PsorConfig::default()));

        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path));
                }
                figment = figment.merge(Yaml::file(path));
            }
            None => {
                if Path::new(DEFAULT_CONFIG_FILE).exists() {
                    figment = figment.merge(Yaml::file(DEFAULT_CONFIG_FILE));
                }
            }
        }

        Self::from_figment(
            figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG", "LOG"]).split("__")),
        )
    }

    /// Load configuration from a specific file layered over defaults.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        Self::from_figment(
            Figment::from(Serialized::defaults(PsorConfig::default())).merge(Yaml::file(path)),
        )
    }

    /// Extract and validate a prepared figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layered(yaml: &str) -> Result<PsorConfig, ConfigError> {
        PsorConfig::from_figment(
            Figment::from(Serialized::defaults(PsorConfig::default())).merge(Yaml::string(yaml)),
        )
    }

    #[test]
    fn default_config_validation() {
        let config = PsorConfig::default();
        config.validate().expect("Default config should validate");
        assert_eq!(config.telemetry.level, DEFAULT_LEVEL);
        assert_eq!(config.ticketing.project_key, "SEC");
        assert_eq!(config.ticketing.issue_type, "Task");
        assert!(config.firewall.protected_networks.is_empty());
        assert!(!config.firewall.require_ip_literal);
        assert!(config.endpoint.critical_assets.is_empty());
    }

    #[test]
    fn yaml_layer_overrides_defaults() {
        let config = layered(
            r#"
firewall:
  protected_networks: ["10.0.0.0/8", "192.168.0.0/16"]
  require_ip_literal: true
endpoint:
  critical_assets: ["dc-01"]
ticketing:
  project_key: OPS
"#,
        )
        .unwrap();

        assert_eq!(config.firewall.protected_networks.len(), 2);
        assert!(config.firewall.require_ip_literal);
        assert!(config.endpoint.is_critical("dc-01"));
        assert_eq!(config.ticketing.project_key, "OPS");
        // untouched sections keep their defaults
        assert_eq!(config.ticketing.issue_type, "Task");
        assert_eq!(config.telemetry.level, "warn");
    }

    #[test]
    fn invalid_values_fail_validation() {
        let err = layered("telemetry:\n  level: chatty\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = layered("firewall:\n  protected_networks: [\"0.0.0.0/0\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn malformed_network_is_a_parsing_error() {
        let err = layered("firewall:\n  protected_networks: [\"not-a-cidr\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parsing(_)));
    }

    #[test]
    fn missing_explicit_file() {
        let err = PsorConfig::load_from_path("/nonexistent/psor.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_from_path_reads_yaml() {
        let path = std::env::temp_dir().join(format!("psor-config-{}.yaml", std::process::id()));
        std::fs::write(&path, "endpoint:\n  critical_assets: [\"web-01\", \"db-01\"]\n").unwrap();

        let config = PsorConfig::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.endpoint.critical_assets, vec!["web-01", "db-01"]);
    }
}
