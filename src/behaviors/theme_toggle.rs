//! Dark-mode toggle persisted to storage.

use std::sync::Arc;

use tracing::debug;

use crate::config::BehaviorConfig;
use crate::dom::Page;
use crate::storage::StoreHandle;
use crate::theme::{self, ThemeMode};

/// Apply the persisted theme at install time (pure read), then wire the
/// toggle control if present: each click flips the body class and persists
/// the resulting mode, so storage and class always agree after a toggle.
pub(crate) fn install(page: &Page, store: StoreHandle, config: &BehaviorConfig) {
    if theme::load(store.as_ref(), &config.theme_storage_key).is_dark() {
        page.add_class(page.body(), &config.dark_mode_class);
    }

    let Some(toggle) = page.element_by_dom_id(&config.theme_toggle_id) else {
        return;
    };

    let dark_class = config.dark_mode_class.clone();
    let storage_key = config.theme_storage_key.clone();
    page.on_click(
        toggle,
        Arc::new(move |page, _event| {
            let is_dark = page.toggle_class(page.body(), &dark_class);
            let mode = if is_dark {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
            theme::store(store.as_ref(), &storage_key, mode);
            debug!(mode = mode.as_str(), "Theme toggled");
        }),
    );
}
