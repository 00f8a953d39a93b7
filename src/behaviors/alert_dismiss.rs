//! Auto-dismiss for the transient flash alert.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::BehaviorConfig;
use crate::dom::Page;
use crate::widgets::AlertKit;

/// Schedule a one-shot close of the first alert region, if both the element
/// and the alert capability exist. No retry, no error surfacing.
pub(crate) fn install(page: &Page, alerts: Option<Arc<dyn AlertKit>>, config: &BehaviorConfig) {
    let Some(kit) = alerts else {
        return;
    };
    let Some(alert) = page.elements_with_class(&config.alert_class).first().copied() else {
        return;
    };

    debug!(delay_ms = config.alert_dismiss_ms, "Scheduling alert auto-dismiss");
    page.schedule(Duration::from_millis(config.alert_dismiss_ms), move |page| {
        kit.close(page, alert);
    });
}
