//! Theme flag handling.
//!
//! A single persisted string flag, `"dark"` or `"light"`, mirrored into a
//! body-level class by the theme-toggle behavior. The mapping from stored
//! strings is deliberately loose in one direction only: exactly `"dark"`
//! selects dark mode, any other value (or no value) is light.

use crate::storage::KeyValueStore;

/// The two page themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The string persisted to storage for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Interpret a stored value. `"dark"` is dark; everything else is light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Read the persisted mode under `key`. Absent or unrecognized values are light.
pub fn load(store: &dyn KeyValueStore, key: &str) -> ThemeMode {
    store
        .get(key)
        .map(|value| ThemeMode::from_stored(&value))
        .unwrap_or_default()
}

/// Persist `mode` under `key`.
pub fn store(store: &dyn KeyValueStore, key: &str, mode: ThemeMode) {
    store.set(key, mode.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_from_stored_dark_only() {
        assert_eq!(ThemeMode::from_stored("dark"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored("Dark"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(""), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored("midnight"), ThemeMode::Light);
    }

    #[test]
    fn test_load_defaults_to_light_when_absent() {
        let store = MemoryStore::new();
        assert_eq!(load(&store, "theme"), ThemeMode::Light);
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let backing = MemoryStore::new();
        store(&backing, "theme", ThemeMode::Dark);
        assert_eq!(backing.get("theme"), Some("dark".to_string()));
        assert_eq!(load(&backing, "theme"), ThemeMode::Dark);

        store(&backing, "theme", ThemeMode::Light);
        assert_eq!(backing.get("theme"), Some("light".to_string()));
        assert_eq!(load(&backing, "theme"), ThemeMode::Light);
    }
}
