//! # Config Module
//!
//! Namer configuration, loadable from a JSON file.
//!
//! ## Example
//! ```json
//! {
//!   "table": {
//!     "entries": [{"max_dimension": 568.0, "label": "iOS-4-in"}],
//!     "match_policy": "exact_long_side",
//!     "phone_fallback": "iOS-3.5-in",
//!     "tablet_label": "iOS-iPad"
//!   },
//!   "layout": {"fields": ["device", "orientation", "name"], "delimiter": "___"},
//!   "phone_model_pattern": "iPhone"
//! }
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::device::DeviceClassTable;
use crate::core::filename::FilenameLayout;
use crate::error::ConfigError;

/// Models matching this pattern are classified as phones
pub const DEFAULT_PHONE_MODEL_PATTERN: &str = "iPhone";

/// File name looked up under the user's config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration for [`ScreenshotNamer`](crate::core::namer::ScreenshotNamer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamerConfig {
    #[serde(default)]
    pub table: DeviceClassTable,

    #[serde(default)]
    pub layout: FilenameLayout,

    #[serde(default = "default_phone_model_pattern")]
    pub phone_model_pattern: String,
}

impl Default for NamerConfig {
    fn default() -> Self {
        Self {
            table: DeviceClassTable::default(),
            layout: FilenameLayout::default(),
            phone_model_pattern: default_phone_model_pattern(),
        }
    }
}

fn default_phone_model_pattern() -> String {
    DEFAULT_PHONE_MODEL_PATTERN.to_string()
}

/// `<config dir>/screenshot-namer/config.json`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("screenshot-namer").join(CONFIG_FILE_NAME))
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> Result<NamerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: NamerConfig =
        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    config.layout.validate()?;

    debug!(path = %path.display(), "Loaded namer configuration");
    Ok(config)
}

/// Load the file at `path`, or the default location, or fall back to defaults
///
/// An explicit path must exist. The default location is optional.
pub fn load_config_or_default(path: Option<&Path>) -> Result<NamerConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }

    match default_config_path() {
        Some(default_path) if default_path.exists() => load_config(&default_path),
        _ => Ok(NamerConfig::default()),
    }
}
