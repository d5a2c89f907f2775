//! Device configuration.

use std::path::Path;

use luxafor_errors::ValidationError;
use luxafor_hid_protocol::{LUXAFOR_FLAG_PRODUCT_ID, LUXAFOR_VENDOR_ID};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LuxaforError, LuxaforResult};

/// How a [`crate::Device`] is located and driven.
///
/// Every field has a default, so `{}` is a valid configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Timeout applied by the high-level operations. 0 waits indefinitely.
    pub default_timeout_ms: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            vendor_id: LUXAFOR_VENDOR_ID,
            product_id: LUXAFOR_FLAG_PRODUCT_ID,
            default_timeout_ms: 0,
        }
    }
}

impl DeviceConfig {
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.default_timeout_ms = timeout_ms;
        self
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LuxaforError::Config`] for malformed JSON and
    /// [`LuxaforError::Validation`] for out-of-range values.
    pub fn from_json(json: &str) -> LuxaforResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LuxaforError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LuxaforError::Config`] when the file cannot be read or parsed.
    pub async fn load_from_path<P: AsRef<Path>>(path: P) -> LuxaforResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            LuxaforError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&content)?;
        debug!("Loaded device config from {:?}", path);
        Ok(config)
    }

    /// Write configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LuxaforError::Config`] when serialization or the write fails.
    pub async fn save_to_path<P: AsRef<Path>>(&self, path: P) -> LuxaforResult<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| LuxaforError::Config(format!("Failed to serialize config: {e}")))?;
        tokio::fs::write(path, content).await.map_err(|e| {
            LuxaforError::Config(format!("Failed to write config file {}: {e}", path.display()))
        })?;
        debug!("Saved device config to {:?}", path);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when either USB ID is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.vendor_id == 0 {
            return Err(ValidationError::required("vendor_id"));
        }
        if self.product_id == 0 {
            return Err(ValidationError::required("product_id"));
        }
        Ok(())
    }
}
