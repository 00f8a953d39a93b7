//! Destructive-action confirmation.

use std::sync::Arc;

use tracing::debug;

use crate::config::BehaviorConfig;
use crate::dom::Page;
use crate::widgets::{ConfirmDialog, ConfirmOutcome, ConfirmRequest};

/// Attach a click handler to every danger-marked element. Confirmation is
/// required unless the opt-out attribute is the literal string "false" - any
/// other value, or none, still confirms. Without a dialog capability the
/// default action proceeds unmodified.
pub(crate) fn install(
    page: &Page,
    dialogs: Option<Arc<dyn ConfirmDialog>>,
    config: &BehaviorConfig,
) {
    // No dialog capability: leave the default actions untouched.
    let Some(dialogs) = dialogs else {
        return;
    };

    let confirm_attr = config.confirm_attr.clone();
    let href_fallback_attr = config.href_fallback_attr.clone();
    let text = config.confirm_text.clone();

    for element in page.elements_with_class(&config.danger_class) {
        let dialogs = dialogs.clone();
        let confirm_attr = confirm_attr.clone();
        let href_fallback_attr = href_fallback_attr.clone();
        let text = text.clone();

        page.on_click(
            element,
            Arc::new(move |page, event| {
                // Literal comparison: only exactly "false" opts out.
                let opted_out = page
                    .attribute(event.target(), &confirm_attr)
                    .is_some_and(|v| v == "false");
                if opted_out {
                    return;
                }

                event.prevent_default();

                let target = event.target();
                let page = page.clone();
                let href_fallback_attr = href_fallback_attr.clone();
                dialogs.show(
                    ConfirmRequest::from_text(&text),
                    Box::new(move |outcome| {
                        if outcome != ConfirmOutcome::Confirmed {
                            debug!("Destructive action cancelled");
                            return;
                        }
                        let href = page
                            .attribute(target, "href")
                            .or_else(|| page.attribute(target, &href_fallback_attr));
                        if let Some(href) = href {
                            page.navigate(&href);
                        } else if let Some(form) = page.closest_form(target) {
                            page.submit_form(form);
                        }
                    }),
                );
            }),
        );
    }
}
