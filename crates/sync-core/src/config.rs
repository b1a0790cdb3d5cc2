// Modified: 2025-09-20

//! Layered configuration for the synchronizer binary (SPEC_FULL.md §6).
//!
//! Mirrors `fedramp_core::config::FedRampConfig`: a `Default` baseline,
//! overridden by a TOML file, overridden again by environment variables,
//! then validated before use.

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::IssueConfig;

/// Everything the CLI needs to run a sync that spec.md's `IssueConfig`
/// doesn't itself carry: where the tracker lives and how to authenticate
/// to it (SPEC_FULL.md §3, ambient fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the issue tracker's REST API.
    pub tracker_base_url: String,
    /// Bearer token used to authenticate to the tracker.
    pub tracker_token: String,
    /// Reconciliation and rendering policy (spec.md §3).
    pub issue: IssueConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tracker_base_url: "https://api.github.com".to_string(),
            tracker_token: String::new(),
            issue: IssueConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables alone, layered over
    /// the struct defaults. Variables are read with a `VIBECHECK_` prefix
    /// and `__` as the nesting separator, e.g. `VIBECHECK_ISSUE__LABEL`.
    pub fn from_env() -> Result<Self> {
        Self::build(None)
    }

    /// Load configuration from a TOML file, layered under environment
    /// variables and over the struct defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::build(Some(path.as_ref()))
    }

    fn build(path: Option<&Path>) -> Result<Self> {
        let defaults = AppConfig::default();
        let mut builder = Config::builder()
            .set_default("tracker_base_url", defaults.tracker_base_url.clone())
            .map_err(|e| Error::configuration(e.to_string()))?
            .set_default("tracker_token", defaults.tracker_token.clone())
            .map_err(|e| Error::configuration(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("VIBECHECK")
                .separator("__")
                .try_parsing(true),
        );

        let raw = builder.build().map_err(|e| Error::configuration(e.to_string()))?;

        let config: AppConfig = raw
            .try_deserialize()
            .map_err(|e| Error::configuration(format!("failed to parse configuration: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tracker_base_url.is_empty() {
            return Err(Error::configuration("tracker_base_url cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_base_url() {
        let mut config = AppConfig::default();
        config.tracker_base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_zero_max_new_per_run_as_a_create_suppression_knob() {
        let mut config = AppConfig::default();
        config.issue.max_new_per_run = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_file_loads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sync.toml");
        std::fs::write(&path, "tracker_base_url = \"https://issues.example.com\"\n[issue]\nlabel = \"custom\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.tracker_base_url, "https://issues.example.com");
        assert_eq!(config.issue.label, "custom");
    }
}
