//! # Configuration Store
//!
//! [ConfigurationProperties] loads `Color.properties` and turns its entries
//! into [Color] values.
//!
//! A store is built exactly once, either from one explicit file or by
//! searching a set of application root directories, and is read-only
//! afterwards. Wrap it in an `Arc` to share it between threads.
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use colorprops_core::config::ExecutionMode;
//! use colorprops_core::store::ConfigurationProperties;
//!
//! let roots = vec![PathBuf::from("/opt/app/Ghidra")];
//! let colors = ConfigurationProperties::from_root_dirs(&roots, ExecutionMode::Installed)?;
//! let background = colors.read_color("Color.background")?;
//! # Ok::<(), colorprops_core::error::ConfigError>(())
//! ```

use std::io::Read;
use std::path::PathBuf;

use vello::peniko::Color;

use crate::color::parse_hex_color;
use crate::config::{ExecutionMode, LoaderConfig};
use crate::error::{ConfigError, ConfigResult};
use crate::properties::PropertyStore;
use crate::resource::ResourceFile;

/// The name of the color properties file.
pub const COLOR_PROPERTY_NAME: &str = "Color.properties";
/// Location of the properties file below each root in development mode.
pub const COLOR_PROPERTY_FILE: &str = "/RuntimeScripts/Common/support/Color.properties";
/// Location of the properties file below the installation directory.
pub const COLOR_PROPERTY_FILE_INS: &str = "/support/Color.properties";

/// Color properties loaded from one or more `Color.properties` files.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationProperties {
    properties: PropertyStore,
    sources: Vec<PathBuf>,
}

impl ConfigurationProperties {
    /// Load the given properties file.
    ///
    /// Fails with [ConfigError::NotFound] if the file does not exist, and
    /// with [ConfigError::Read] or [ConfigError::Parse] if it cannot be loaded.
    pub fn from_file<R: ResourceFile>(file: &R) -> ConfigResult<Self> {
        if !file.exists() {
            return Err(ConfigError::not_found(file.path()));
        }
        let mut config = Self::default();
        config.load(file)?;
        Ok(config)
    }

    /// Search the application root directories using the standard sub-paths.
    ///
    /// See [ConfigurationProperties::from_root_dirs_with].
    pub fn from_root_dirs<R: ResourceFile>(roots: &[R], mode: ExecutionMode) -> ConfigResult<Self> {
        Self::from_root_dirs_with(roots, &LoaderConfig::new().with_mode(mode))
    }

    /// Search the application root directories for properties files.
    ///
    /// In development mode every root is checked for
    /// [LoaderConfig::development_path] and each file found is merged in
    /// order, later files overriding earlier keys. In installed mode only
    /// [LoaderConfig::installed_path] below the parent of the first root is
    /// checked.
    ///
    /// Fails with [ConfigError::PropertiesNotFound] if nothing was loaded. A
    /// read or parse failure on any file aborts the whole load.
    pub fn from_root_dirs_with<R: ResourceFile>(
        roots: &[R],
        loader: &LoaderConfig,
    ) -> ConfigResult<Self> {
        let first = roots.first().ok_or(ConfigError::NoRootDirectories)?;
        let mut config = Self::default();
        let mut searched = Vec::new();

        log::debug!(
            "Searching {} root(s) for {} in {} mode",
            roots.len(),
            COLOR_PROPERTY_NAME,
            loader.mode
        );

        match loader.mode {
            ExecutionMode::Development => {
                for root in roots {
                    let candidate = root.join(&loader.development_path);
                    config.load_if_exists(&candidate, &mut searched)?;
                }
            },
            ExecutionMode::Installed => {
                // Only a filesystem root has no parent; it is its own installation directory.
                let candidate = match first.parent() {
                    Some(install_dir) => install_dir.join(&loader.installed_path),
                    None => first.join(&loader.installed_path),
                };
                config.load_if_exists(&candidate, &mut searched)?;
            },
        }

        if config.sources.is_empty() {
            return Err(ConfigError::PropertiesNotFound { searched });
        }
        Ok(config)
    }

    fn load_if_exists<R: ResourceFile>(
        &mut self,
        candidate: &R,
        searched: &mut Vec<PathBuf>,
    ) -> ConfigResult<()> {
        searched.push(candidate.path().to_path_buf());
        if candidate.exists() {
            self.load(candidate)
        } else {
            log::debug!("No {} at {:?}", COLOR_PROPERTY_NAME, candidate.path());
            Ok(())
        }
    }

    fn load<R: ResourceFile>(&mut self, file: &R) -> ConfigResult<()> {
        let path = file.path();
        let mut bytes = Vec::new();
        {
            let mut stream = file.open().map_err(|e| ConfigError::read(path, e))?;
            stream
                .read_to_end(&mut bytes)
                .map_err(|e| ConfigError::read(path, e))?;
        }

        let before = self.properties.len();
        self.properties
            .load_bytes(&bytes)
            .map_err(|e| ConfigError::parse(path, e))?;
        log::info!(
            "Loaded {} from {:?} ({} new keys, {} total)",
            COLOR_PROPERTY_NAME,
            path,
            self.properties.len() - before,
            self.properties.len()
        );
        self.sources.push(path.to_path_buf());
        Ok(())
    }

    /// Read the color stored under `key`.
    ///
    /// Fails with [ConfigError::PropertyMissing] if the key is not defined and
    /// with [ConfigError::InvalidColor] if its value is not a hex color.
    pub fn read_color(&self, key: &str) -> ConfigResult<Color> {
        let value = self
            .get(key)
            .ok_or_else(|| ConfigError::property_missing(key))?;
        parse_hex_color(value).map_err(|source| ConfigError::InvalidColor {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
    }

    /// Read the color stored under `key`, or `fallback` if it is missing or invalid.
    pub fn read_color_or(&self, key: &str, fallback: Color) -> Color {
        self.read_color(key).unwrap_or_else(|e| {
            log::warn!("{}, using fallback color", e);
            fallback
        })
    }

    /// Raw value of a property.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    /// Raw value of a property, or `default` if it is not defined.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Whether the key is defined.
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no properties are defined.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter()
    }

    /// The underlying property map.
    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    /// The files that were loaded, in load order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }
}

impl From<PropertyStore> for ConfigurationProperties {
    fn from(properties: PropertyStore) -> Self {
        Self {
            properties,
            sources: Vec::new(),
        }
    }
}
