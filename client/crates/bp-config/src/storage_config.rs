use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_KEY};

use std::path::Path;

use serde::Deserialize;

/// Device-local session storage
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for stored records, relative to the config directory
    pub dir: String,
    /// Key the session record is stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Validate storage dir doesn't escape config dir
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        let key_ok = !self.key.is_empty()
            && !self.key.starts_with('.')
            && self
                .key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !key_ok {
            return Err(ConfigError::storage(format!(
                "storage.key may only contain letters, digits, '-', '_' and '.', got '{}'",
                self.key
            )));
        }

        Ok(())
    }
}
