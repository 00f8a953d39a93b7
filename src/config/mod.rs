//! Configuration module - selector names, storage keys, and timing knobs
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use loader::load_config;
pub use types::{BehaviorConfig, ConfirmText};

// Additional exports for tests
#[cfg(test)]
pub use defaults::{
    DEFAULT_ALERT_DISMISS_MS, DEFAULT_CONFIRM_TITLE, DEFAULT_DANGER_CLASS,
    DEFAULT_PLANT_CARD_CLASS, DEFAULT_THEME_STORAGE_KEY, DEFAULT_VISIBILITY_THRESHOLD,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
