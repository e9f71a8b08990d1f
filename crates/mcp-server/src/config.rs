//! Server configuration: built-in defaults, then an optional TOML file (`DEVHELPER_CONFIG`),
//! then environment overrides.
//!
//! ```toml
//! [install]
//! program = "pnpm"
//! timeout_secs = 300
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::installer::{Installer, DEFAULT_INSTALL_PROGRAM};

pub const CONFIG_PATH_ENV: &str = "DEVHELPER_CONFIG";
pub const INSTALL_PROGRAM_ENV: &str = "DEVHELPER_INSTALL_PROGRAM";
pub const INSTALL_TIMEOUT_ENV: &str = "DEVHELPER_INSTALL_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallConfig {
    pub program: String,
    /// `None` (or `0`) waits for the installer indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_INSTALL_PROGRAM.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub install: InstallConfig,
}

impl ServerConfig {
    /// Resolve configuration from the process environment. Never fails: a broken file or value is
    /// logged and the previous layer is kept.
    pub fn from_env() -> Self {
        let lookup = |key: &str| std::env::var(key).ok();

        let mut config = match lookup(CONFIG_PATH_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            Some(path) => match Self::from_file(Path::new(&path)) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("{err}; falling back to built-in defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        };

        for err in config.apply_overrides(lookup) {
            log::warn!("{err}; keeping configured value");
        }
        config
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply `DEVHELPER_*` overrides through `lookup`; returns the values that were rejected.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut rejected = Vec::new();

        if let Some(program) = lookup(INSTALL_PROGRAM_ENV) {
            let program = program.trim();
            if program.is_empty() {
                rejected.push(ConfigError::InvalidValue {
                    key: INSTALL_PROGRAM_ENV,
                    value: program.to_string(),
                });
            } else {
                self.install.program = program.to_string();
            }
        }

        if let Some(raw) = lookup(INSTALL_TIMEOUT_ENV) {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                self.install.timeout_secs = None;
            } else {
                match trimmed.parse::<u64>() {
                    Ok(secs) => self.install.timeout_secs = Some(secs),
                    Err(_) => rejected.push(ConfigError::InvalidValue {
                        key: INSTALL_TIMEOUT_ENV,
                        value: raw,
                    }),
                }
            }
        }

        rejected
    }

    pub fn install_timeout(&self) -> Option<Duration> {
        self.install
            .timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn installer(&self) -> Installer {
        Installer::new(self.install.program.clone(), self.install_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_npm_without_timeout() {
        let config = ServerConfig::default();
        assert_eq!(config.install.program, "npm");
        assert_eq!(config.install_timeout(), None);
    }

    #[test]
    fn toml_file_layer_is_parsed() {
        let config =
            ServerConfig::from_toml_str("[install]\nprogram = \"pnpm\"\ntimeout_secs = 90\n")
                .unwrap();
        assert_eq!(config.install.program, "pnpm");
        assert_eq!(config.install_timeout(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn unknown_toml_keys_are_rejected() {
        let err = ServerConfig::from_toml_str("[install]\nprogramme = \"yarn\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut config = ServerConfig::from_toml_str("[install]\nprogram = \"pnpm\"\n").unwrap();
        let rejected = config.apply_overrides(env(&[
            (INSTALL_PROGRAM_ENV, "yarn"),
            (INSTALL_TIMEOUT_ENV, "15"),
        ]));
        assert!(rejected.is_empty());
        assert_eq!(config.install.program, "yarn");
        assert_eq!(config.installer().timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn zero_or_blank_timeout_means_unbounded() {
        let mut config = ServerConfig::default();
        config.apply_overrides(env(&[(INSTALL_TIMEOUT_ENV, "0")]));
        assert_eq!(config.install_timeout(), None);

        config.install.timeout_secs = Some(5);
        config.apply_overrides(env(&[(INSTALL_TIMEOUT_ENV, " ")]));
        assert_eq!(config.install_timeout(), None);
    }

    #[test]
    fn bad_override_is_reported_and_ignored() {
        let mut config = ServerConfig::default();
        let rejected = config.apply_overrides(env(&[(INSTALL_TIMEOUT_ENV, "soon")]));
        assert_eq!(rejected.len(), 1);
        assert_eq!(
            rejected[0].to_string(),
            "Invalid value for DEVHELPER_INSTALL_TIMEOUT_SECS: 'soon'"
        );
        assert_eq!(config.install.timeout_secs, None);
    }
}
