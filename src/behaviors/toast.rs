//! Global toast helper.

use std::sync::Arc;

use tracing::debug;

use crate::config::BehaviorConfig;
use crate::dom::Page;
use crate::widgets::{ToastKit, ToastVariant};

/// Handle for showing toast notifications.
///
/// An explicit service rather than a page-global: pass a clone to whoever
/// needs to trigger toasts. Showing a toast overwrites any pending message in
/// place; there is no queue and no stacking.
#[derive(Clone)]
pub struct Toasts {
    page: Page,
    kit: Option<Arc<dyn ToastKit>>,
    container_id: String,
    body_class: String,
}

impl Toasts {
    pub(crate) fn new(
        page: Page,
        kit: Option<Arc<dyn ToastKit>>,
        config: &BehaviorConfig,
    ) -> Self {
        Self {
            page,
            kit,
            container_id: config.toast_container_id.clone(),
            body_class: config.toast_body_class.clone(),
        }
    }

    /// Show `message` in the toast container. Missing container: silent
    /// no-op. The kit owns display timing and dismissal.
    pub fn show(&self, message: &str) {
        self.display(message, None);
    }

    /// Show `message` tagged with a flash-category variant, matching the
    /// categories the server attaches to its flash messages.
    pub fn show_with_variant(&self, message: &str, variant: ToastVariant) {
        self.display(message, Some(variant));
    }

    fn display(&self, message: &str, variant: Option<ToastVariant>) {
        let Some(container) = self.page.element_by_dom_id(&self.container_id) else {
            return;
        };
        if let Some(body) = self.page.descendant_with_class(container, &self.body_class) {
            self.page.set_text(body, message);
        }
        match &self.kit {
            Some(kit) => {
                if let Some(variant) = variant {
                    kit.set_variant(&self.page, container, variant);
                }
                kit.show(&self.page, container);
            }
            None => debug!("Toast capability absent, message set but not shown"),
        }
    }
}
