//! # Loader Configuration
//!
//! Controls where [ConfigurationProperties](crate::store::ConfigurationProperties)
//! looks for `Color.properties` when given a set of application root
//! directories.
//!
//! ## Overview
//!
//! - **[ExecutionMode]**: source checkout (`Development`) or packaged
//!   installation (`Installed`).
//! - **[LoaderConfig]**: the execution mode plus the relative sub-paths that
//!   are checked in each mode.
//!
//! The store never reads the environment itself. Applications decide the mode
//! and hand it over, either directly or through a [LoaderConfig].
//!
//! ## Usage Examples
//!
//! ### Programmatic Configuration
//!
//! ```rust
//! use colorprops_core::config::{ExecutionMode, LoaderConfig};
//!
//! let config = LoaderConfig::new()
//!     .with_mode(ExecutionMode::Development)
//!     .with_installed_path("/share/Color.properties");
//! assert!(config.mode.is_development());
//! ```
//!
//! ### Environment Variables
//!
//! ```bash
//! export COLORPROPS_DEV_MODE=true               # search every root's source tree
//! export COLORPROPS_CONFIG=/etc/app/colors.toml # load a TOML loader config
//! ```
//!
//! ### Configuration File Format
//!
//! ```toml
//! [color_properties]
//! mode = "development"
//! development_path = "/RuntimeScripts/Common/support/Color.properties"
//! installed_path = "/support/Color.properties"
//! ```
//!
//! Every key is optional.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::store::{COLOR_PROPERTY_FILE, COLOR_PROPERTY_FILE_INS};

/// Environment variable selecting the [ExecutionMode].
pub const DEV_MODE_ENV: &str = "COLORPROPS_DEV_MODE";
/// Environment variable naming a TOML [LoaderConfig] file.
pub const CONFIG_PATH_ENV: &str = "COLORPROPS_CONFIG";

/// How the running application is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Running from a source checkout with several module roots.
    Development,
    /// Running from a packaged installation.
    #[default]
    Installed,
}

impl ExecutionMode {
    /// Map an "is in development mode" flag to a mode.
    pub fn from_flag(development: bool) -> Self {
        if development {
            Self::Development
        } else {
            Self::Installed
        }
    }

    /// Whether this is [ExecutionMode::Development].
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl FromStr for ExecutionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" | "1" | "true" | "yes" | "on" => Ok(Self::Development),
            "installed" | "install" | "0" | "false" | "no" | "off" => Ok(Self::Installed),
            other => Err(ConfigError::config(format!("unknown execution mode '{}'", other))),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Installed => f.write_str("installed"),
        }
    }
}

/// Where to look for the properties file under a set of root directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// The execution mode.
    pub mode: ExecutionMode,
    /// Checked under every root directory in development mode.
    pub development_path: String,
    /// Checked under the installation directory in installed mode.
    pub installed_path: String,
}

#[derive(Debug, Default, Deserialize)]
struct LoaderConfigFile {
    #[serde(default)]
    color_properties: LoaderSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoaderSection {
    mode: Option<ExecutionMode>,
    development_path: Option<String>,
    installed_path: Option<String>,
}

impl LoaderConfig {
    /// Installed mode with the standard sub-paths.
    pub fn new() -> Self {
        Self {
            mode: ExecutionMode::Installed,
            development_path: COLOR_PROPERTY_FILE.to_string(),
            installed_path: COLOR_PROPERTY_FILE_INS.to_string(),
        }
    }

    /// Set the execution mode.
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the sub-path checked under each root in development mode.
    pub fn with_development_path(mut self, path: impl Into<String>) -> Self {
        self.development_path = path.into();
        self
    }

    /// Set the sub-path checked under the installation directory.
    pub fn with_installed_path(mut self, path: impl Into<String>) -> Self {
        self.installed_path = path.into();
        self
    }

    /// Build a configuration from `COLORPROPS_CONFIG` and `COLORPROPS_DEV_MODE`.
    ///
    /// The file named by `COLORPROPS_CONFIG` is applied first; a failure to
    /// load it is logged and the defaults are kept. `COLORPROPS_DEV_MODE`
    /// then overrides the mode.
    pub fn from_env_or_default() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(path) = var(CONFIG_PATH_ENV) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(e) => log::warn!("Ignoring loader config {:?}: {}", path, e),
            }
        }

        if let Some(flag) = var(DEV_MODE_ENV) {
            match flag.parse() {
                Ok(mode) => config.mode = mode,
                Err(e) => log::warn!("Ignoring {}: {}", DEV_MODE_ENV, e),
            }
        }

        config
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::config(format!("{:?}: {}", path, e)))?;
        Self::from_toml(&content)
    }

    /// Load a configuration from TOML text.
    ///
    /// ```rust
    /// use colorprops_core::config::{ExecutionMode, LoaderConfig};
    ///
    /// let config = LoaderConfig::from_toml(r#"
    /// [color_properties]
    /// mode = "development"
    /// "#).unwrap();
    /// assert_eq!(config.mode, ExecutionMode::Development);
    /// ```
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let file: LoaderConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::config(e.to_string()))?;
        let section = file.color_properties;

        let mut config = Self::new();
        if let Some(mode) = section.mode {
            config.mode = mode;
        }
        if let Some(path) = section.development_path {
            config.development_path = path;
        }
        if let Some(path) = section.installed_path {
            config.installed_path = path;
        }
        Ok(config)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = LoaderConfig::default();
        assert_eq!(config.mode, ExecutionMode::Installed);
        assert_eq!(config.development_path, "/RuntimeScripts/Common/support/Color.properties");
        assert_eq!(config.installed_path, "/support/Color.properties");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("true".parse::<ExecutionMode>().unwrap(), ExecutionMode::Development);
        assert_eq!(" Development ".parse::<ExecutionMode>().unwrap(), ExecutionMode::Development);
        assert_eq!("0".parse::<ExecutionMode>().unwrap(), ExecutionMode::Installed);
        assert!("maybe".parse::<ExecutionMode>().is_err());
        assert_eq!(ExecutionMode::from_flag(true), ExecutionMode::Development);
        assert_eq!(ExecutionMode::Installed.to_string(), "installed");
    }

    #[test]
    fn test_from_toml() {
        let config = LoaderConfig::from_toml(
            r#"
[color_properties]
mode = "development"
development_path = "/themes/Color.properties"
"#,
        )
        .unwrap();
        assert_eq!(config.mode, ExecutionMode::Development);
        assert_eq!(config.development_path, "/themes/Color.properties");
        assert_eq!(config.installed_path, "/support/Color.properties");

        assert_eq!(LoaderConfig::from_toml("").unwrap(), LoaderConfig::new());
        assert!(LoaderConfig::from_toml("[color_properties]\nmode = \"sideways\"\n").is_err());
    }

    #[test]
    fn test_from_vars() {
        let vars: HashMap<&str, &str> = [(DEV_MODE_ENV, "yes")].into_iter().collect();
        let config = LoaderConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.mode, ExecutionMode::Development);

        let vars: HashMap<&str, &str> = [(DEV_MODE_ENV, "garbage")].into_iter().collect();
        let config = LoaderConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.mode, ExecutionMode::Installed);

        let vars: HashMap<&str, &str> =
            [(CONFIG_PATH_ENV, "/definitely/not/here.toml")].into_iter().collect();
        let config = LoaderConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config, LoaderConfig::new());
    }
}
