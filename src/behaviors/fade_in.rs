//! Fade-in-on-scroll for plant cards.

use std::sync::Arc;

use tracing::debug;

use crate::config::BehaviorConfig;
use crate::dom::Page;

/// Watch every plant card; the first time one is reported at least 10%
/// visible it gains the fade-in class and is released. The class is never
/// removed by this behavior.
pub(crate) fn install(page: &Page, config: &BehaviorConfig) {
    let cards = page.elements_with_class(&config.plant_card_class);
    if cards.is_empty() {
        return;
    }
    debug!(count = cards.len(), "Watching plant cards for fade-in");

    let fade_in_class = config.fade_in_class.clone();
    page.observe_visibility(
        config.visibility_threshold,
        &cards,
        Arc::new(move |page, id| {
            page.add_class(id, &fade_in_class);
        }),
    );
}
