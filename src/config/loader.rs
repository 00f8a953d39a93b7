//! Configuration loading from the file system
//!
//! Handles loading and parsing a JSON behavior config file.

use std::path::Path;

use tracing::{info, warn};

use super::types::BehaviorConfig;

/// Load configuration from a JSON file.
///
/// Returns `BehaviorConfig::default()` if the file doesn't exist or fails to
/// read or parse; the failure is logged, never propagated. The page still gets
/// its stock behaviors on a broken config.
pub fn load_config(path: &Path) -> BehaviorConfig {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return BehaviorConfig::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            return BehaviorConfig::default();
        }
    };

    match serde_json::from_str::<BehaviorConfig>(&content) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded behavior config");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
            BehaviorConfig::default()
        }
    }
}
