//! Submit-spinner reveal.

use std::sync::Arc;

use crate::config::BehaviorConfig;
use crate::dom::Page;

/// Attach a submit handler to every form that reveals the loading indicator
/// if it exists. Default submission is never prevented and the spinner is
/// never re-hidden; the ensuing navigation supersedes it.
pub(crate) fn install(page: &Page, config: &BehaviorConfig) {
    let spinner_id = config.spinner_id.clone();
    let hidden_class = config.hidden_class.clone();

    for form in page.forms() {
        let spinner_id = spinner_id.clone();
        let hidden_class = hidden_class.clone();
        page.on_submit(
            form,
            Arc::new(move |page, _event| {
                if let Some(spinner) = page.element_by_dom_id(&spinner_id) {
                    page.remove_class(spinner, &hidden_class);
                }
            }),
        );
    }
}
