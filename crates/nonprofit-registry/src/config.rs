//! Registry configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::organization::DEFAULT_CATEGORY;

/// Storage key the browse and registration pages share.
pub const DEFAULT_STORAGE_KEY: &str = "registeredOrganizations";

/// Settings for a [`RegistryContext`](crate::RegistryContext).
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Key the organization array is stored under
    pub storage_key: String,

    /// Category given to organizations that have none
    pub default_category: String,

    /// Directory for file-backed storage
    pub storage_dir: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
            storage_dir: None,
        }
    }
}

impl RegistryConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Use a different fallback category.
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// Store records as files under `dir`.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Parse a JSON config document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(RegistryError::InvalidKey(self.storage_key.clone()));
        }
        if self.default_category.trim().is_empty() {
            return Err(RegistryError::Config(
                "default_category must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
