//! PageBehaviors - the behavior installer.
//!
//! Five independent, order-free setup actions against the current page, each
//! guarded by an existence check for its targets, plus the toast helper
//! returned to the caller. Safe to install on pages lacking any of the target
//! elements; nothing here depends on another behavior having run.

mod alert_dismiss;
mod confirm;
mod fade_in;
mod spinner;
mod theme_toggle;
mod toast;

#[cfg(test)]
#[path = "behaviors_tests.rs"]
mod tests;

pub use toast::Toasts;

use tracing::info;

use crate::config::BehaviorConfig;
use crate::dom::Page;
use crate::storage::StoreHandle;
use crate::widgets::WidgetCapabilities;

pub struct PageBehaviors;

impl PageBehaviors {
    /// Wire every behavior into `page` and return the toast helper.
    ///
    /// The setup actions are independent; their relative order carries no
    /// meaning. Missing elements or capabilities degrade each action to a
    /// no-op rather than an error.
    pub fn install(
        page: &Page,
        store: StoreHandle,
        capabilities: WidgetCapabilities,
        config: &BehaviorConfig,
    ) -> Toasts {
        info!(event_type = "page_ready", "Zero Garden page behaviors initialized");

        fade_in::install(page, config);
        alert_dismiss::install(page, capabilities.alerts.clone(), config);
        theme_toggle::install(page, store, config);
        spinner::install(page, config);
        confirm::install(page, capabilities.dialogs.clone(), config);

        Toasts::new(page.clone(), capabilities.toasts, config)
    }
}
