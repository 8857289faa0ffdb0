#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{RealtyError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

/// Looked up in the working directory when no config file is named.
pub const DEFAULT_CONFIG_FILE: &str = "realty-hub.toml";
pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_CONTACTS_FILE: &str = "brokers.csv";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Values supplied on the command line; each one beats the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<String>,
    pub contacts_file: Option<String>,
    pub currency_symbol: Option<String>,
}

/// Effective runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: String,
    pub contacts_file: String,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            contacts_file: DEFAULT_CONTACTS_FILE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then the config file, then command-line overrides.
    pub fn resolve(overrides: &SettingsOverrides) -> Result<Self> {
        let file_config = match &overrides.config_path {
            Some(path) => Some(load_config(path)?),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Some(load_config(Path::new(DEFAULT_CONFIG_FILE))?)
            }
            None => None,
        };

        let settings = Self::merge(file_config.as_ref(), overrides);
        settings.validate()?;
        Ok(settings)
    }

    pub fn merge(file_config: Option<&TomlConfig>, overrides: &SettingsOverrides) -> Self {
        let defaults = Self::default();
        let pick = |cli: &Option<String>, file: Option<&str>, default: String| {
            cli.clone()
                .or_else(|| file.map(str::to_string))
                .unwrap_or(default)
        };

        Self {
            data_dir: pick(
                &overrides.data_dir,
                file_config.and_then(|c| c.data_dir()),
                defaults.data_dir,
            ),
            contacts_file: pick(
                &overrides.contacts_file,
                file_config.and_then(|c| c.contacts_file()),
                defaults.contacts_file,
            ),
            currency_symbol: pick(
                &overrides.currency_symbol,
                file_config.and_then(|c| c.currency_symbol()),
                defaults.currency_symbol,
            ),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_path("contacts_file", &self.contacts_file)?;
        validate_non_empty_string("currency_symbol", &self.currency_symbol)
    }
}

fn load_config(path: &Path) -> Result<TomlConfig> {
    tracing::debug!("Loading configuration from {}", path.display());
    let config = TomlConfig::from_file(path).map_err(|e| match e {
        RealtyError::IoError(io) => RealtyError::config(format!(
            "cannot read config file '{}': {}",
            path.display(),
            io
        )),
        other => other,
    })?;
    config.validate().map_err(|e| RealtyError::config(e.to_string()))?;
    Ok(config)
}
