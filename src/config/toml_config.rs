use crate::utils::error::{RealtyError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<StorageConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
    pub contacts_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RealtyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text, expanding `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| RealtyError::config(format!("TOML parsing error: {}", e)))
    }

    // Unset variables are left as written so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| RealtyError::config(format!("bad substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn data_dir(&self) -> Option<&str> {
        self.storage.as_ref()?.data_dir.as_deref()
    }

    pub fn contacts_file(&self) -> Option<&str> {
        self.storage.as_ref()?.contacts_file.as_deref()
    }

    pub fn currency_symbol(&self) -> Option<&str> {
        self.display.as_ref()?.currency_symbol.as_deref()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(dir) = self.data_dir() {
            validate_path("storage.data_dir", dir)?;
        }
        if let Some(file) = self.contacts_file() {
            validate_path("storage.contacts_file", file)?;
        }
        if let Some(symbol) = self.currency_symbol() {
            validate_non_empty_string("display.currency_symbol", symbol)?;
        }
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
