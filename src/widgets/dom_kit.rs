//! Built-in widget kit acting directly on the page model.
//!
//! Stands in for the CSS framework's alert and toast components: closing an
//! alert detaches it from the tree; showing a toast applies the show class and
//! schedules its removal after the configured display duration.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::{AlertKit, ToastKit};
use crate::dom::{ElementId, Page};

/// Toast variant, mirroring the flash categories the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    Success,
    #[default]
    Info,
    Warning,
    Danger,
}

impl ToastVariant {
    /// The container class for this variant.
    pub fn class(&self) -> &'static str {
        match self {
            ToastVariant::Success => "toast-success",
            ToastVariant::Info => "toast-info",
            ToastVariant::Warning => "toast-warning",
            ToastVariant::Danger => "toast-danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Info => "ℹ",
            ToastVariant::Warning => "⚠",
            ToastVariant::Danger => "✕",
        }
    }

    const ALL: [ToastVariant; 4] = [
        ToastVariant::Success,
        ToastVariant::Info,
        ToastVariant::Warning,
        ToastVariant::Danger,
    ];
}

/// Dom-acting alert and toast implementation.
pub struct DomWidgetKit {
    show_class: String,
    hide_ms: u64,
    /// Bumped on every show; only the newest show's hide timer is allowed
    /// to remove the class, so a re-show restarts the visibility window.
    show_generation: Arc<AtomicU64>,
}

impl DomWidgetKit {
    pub fn new(show_class: &str, hide_ms: u64) -> Self {
        Self {
            show_class: show_class.to_string(),
            hide_ms,
            show_generation: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl AlertKit for DomWidgetKit {
    fn close(&self, page: &Page, alert: ElementId) {
        debug!(alert = ?alert, "Closing alert");
        page.detach(alert);
    }
}

impl ToastKit for DomWidgetKit {
    fn show(&self, page: &Page, container: ElementId) {
        page.add_class(container, &self.show_class);
        let generation = self.show_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current = self.show_generation.clone();
        let show_class = self.show_class.clone();
        // A re-show restarts the autohide window: timers from earlier shows
        // find a newer generation and leave the class alone.
        page.schedule(Duration::from_millis(self.hide_ms), move |page| {
            if current.load(Ordering::SeqCst) == generation {
                page.remove_class(container, &show_class);
            }
        });
    }

    fn set_variant(&self, page: &Page, container: ElementId, variant: ToastVariant) {
        for v in ToastVariant::ALL {
            page.remove_class(container, v.class());
        }
        page.add_class(container, variant.class());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Tag;

    #[test]
    fn test_alert_close_detaches() {
        let page = Page::new();
        let alert = page.create_element(Tag::Div);
        page.append_child(page.body(), alert);
        page.add_class(alert, "alert");

        let kit = DomWidgetKit::new("show", 5000);
        kit.close(&page, alert);
        assert!(page.is_detached(alert));
        assert!(page.elements_with_class("alert").is_empty());
    }

    #[test]
    fn test_toast_show_applies_class_and_auto_hides() {
        let page = Page::new();
        let toast = page.create_element(Tag::Div);
        page.append_child(page.body(), toast);

        let kit = DomWidgetKit::new("show", 5000);
        kit.show(&page, toast);
        assert!(page.has_class(toast, "show"));

        page.advance(Duration::from_millis(4999));
        assert!(page.has_class(toast, "show"));
        page.advance(Duration::from_millis(1));
        assert!(!page.has_class(toast, "show"));
    }

    #[test]
    fn test_reshow_restarts_the_autohide_window() {
        let page = Page::new();
        let toast = page.create_element(Tag::Div);
        page.append_child(page.body(), toast);

        let kit = DomWidgetKit::new("show", 5000);
        kit.show(&page, toast);
        page.advance(Duration::from_millis(3000));
        kit.show(&page, toast);

        // The first show's timer fires here; it must not strip the class
        // from the re-shown toast.
        page.advance(Duration::from_millis(2000));
        assert!(page.has_class(toast, "show"));

        // The re-show's own window still closes on schedule.
        page.advance(Duration::from_millis(3000));
        assert!(!page.has_class(toast, "show"));
    }

    #[test]
    fn test_variant_classes_and_icons_are_distinct() {
        let classes: Vec<&str> = ToastVariant::ALL.iter().map(|v| v.class()).collect();
        let icons: Vec<&str> = ToastVariant::ALL.iter().map(|v| v.icon()).collect();
        for list in [&classes, &icons] {
            let mut deduped = list.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), list.len());
        }
        assert_eq!(ToastVariant::default(), ToastVariant::Info);
    }

    #[test]
    fn test_set_variant_replaces_previous() {
        let page = Page::new();
        let toast = page.create_element(Tag::Div);
        page.append_child(page.body(), toast);

        let kit = DomWidgetKit::new("show", 5000);
        kit.set_variant(&page, toast, ToastVariant::Success);
        assert!(page.has_class(toast, "toast-success"));

        kit.set_variant(&page, toast, ToastVariant::Danger);
        assert!(!page.has_class(toast, "toast-success"));
        assert!(page.has_class(toast, "toast-danger"));
    }
}
