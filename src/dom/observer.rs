//! One-shot visibility watchers.
//!
//! Models the viewport-intersection pattern: a watcher tracks a set of
//! elements and a fractional threshold; the first report at or above the
//! threshold fires the callback for that element and releases it. Later
//! reports for a released element are ignored.

use std::collections::HashSet;
use std::sync::Arc;

use super::element::ElementId;
use super::Page;

/// Callback fired once per element when it first crosses the threshold.
pub type VisibilityCallback = Arc<dyn Fn(&Page, ElementId) + Send + Sync>;

pub(crate) struct VisibilityWatcher {
    threshold: f32,
    watched: HashSet<ElementId>,
    callback: VisibilityCallback,
}

impl VisibilityWatcher {
    pub fn new(threshold: f32, callback: VisibilityCallback) -> Self {
        Self {
            threshold,
            watched: HashSet::new(),
            callback,
        }
    }

    pub fn watch(&mut self, id: ElementId) {
        self.watched.insert(id);
    }

    /// Handle a visibility report. Returns the callback to invoke when this
    /// report crosses the threshold for a still-watched element; the element
    /// is released before the callback runs, so re-entry cannot fire it twice.
    pub fn on_report(&mut self, id: ElementId, fraction: f32) -> Option<VisibilityCallback> {
        if fraction < self.threshold || !self.watched.remove(&id) {
            return None;
        }
        Some(self.callback.clone())
    }

    #[cfg(test)]
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_watcher(threshold: f32) -> VisibilityWatcher {
        VisibilityWatcher::new(threshold, Arc::new(|_, _| {}))
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let mut watcher = noop_watcher(0.1);
        watcher.watch(ElementId(0));

        assert!(watcher.on_report(ElementId(0), 0.05).is_none());
        assert!(watcher.on_report(ElementId(0), 0.1).is_some());
        // Released: further crossings are ignored.
        assert!(watcher.on_report(ElementId(0), 0.9).is_none());
        assert_eq!(watcher.watched_count(), 0);
    }

    #[test]
    fn test_unwatched_elements_are_ignored() {
        let mut watcher = noop_watcher(0.1);
        watcher.watch(ElementId(1));
        assert!(watcher.on_report(ElementId(2), 1.0).is_none());
        assert_eq!(watcher.watched_count(), 1);
    }

    #[test]
    fn test_elements_release_independently() {
        let mut watcher = noop_watcher(0.5);
        watcher.watch(ElementId(0));
        watcher.watch(ElementId(1));

        assert!(watcher.on_report(ElementId(0), 0.6).is_some());
        assert_eq!(watcher.watched_count(), 1);
        assert!(watcher.on_report(ElementId(1), 0.4).is_none());
        assert!(watcher.on_report(ElementId(1), 0.5).is_some());
    }
}
