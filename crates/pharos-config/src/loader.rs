//! Route configuration loader.
//!
//! Loads [`RoutesConfig`] documents from TOML or JSON files and merges them
//! by appending, so a later file's routes register after an earlier file's.

use std::fs;
use std::path::Path;

use crate::{ConfigError, RoutesConfig};

/// Builder-style loader for route configuration.
///
/// # Example
///
/// ```no_run
/// use pharos_config::ConfigLoader;
///
/// # fn main() -> Result<(), pharos_config::ConfigError> {
/// let config = ConfigLoader::new()
///     .with_file("routes.toml")?
///     .with_optional_file("routes.local.toml")?
///     .load();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config: RoutesConfig,
}

impl ConfigLoader {
    /// Creates a loader with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration file, appending its entries.
    ///
    /// The format is chosen by extension: `.toml` or `.json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable, has an
    /// unsupported extension, or fails to parse.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        let parsed = Self::parse_file(&content, path)?;
        self.config.extend(parsed);

        Ok(self)
    }

    /// Loads a configuration file if it exists, silently continuing if not.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or
    /// parsed.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            Ok(self)
        }
    }

    /// Parses configuration from a string, appending its entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `format` is not `"toml"` or `"json"`, or if
    /// parsing fails.
    pub fn with_string(mut self, content: &str, format: &str) -> Result<Self, ConfigError> {
        let parsed = match format.to_lowercase().as_str() {
            "toml" => toml::from_str(content)?,
            "json" => serde_json::from_str(content)?,
            _ => return Err(ConfigError::unsupported_format(format)),
        };

        self.config.extend(parsed);
        Ok(self)
    }

    /// Returns the merged configuration document.
    #[must_use]
    pub fn load(self) -> RoutesConfig {
        self.config
    }

    fn parse_file(content: &str, path: &Path) -> Result<RoutesConfig, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("json") => Ok(serde_json::from_str(content)?),
            _ => Err(ConfigError::unsupported_format(path)),
        }
    }
}
