//! Host-resolved confirmation dialogs.
//!
//! `PendingConfirms` queues every `show` call; the host (a UI shell, or a
//! test) inspects the pending request and resolves it when the user chooses.
//! Each resolution callback runs exactly once; requests resolve in FIFO order.

use parking_lot::Mutex;
use tracing::debug;

use super::{ConfirmDialog, ConfirmOutcome, ConfirmRequest, ConfirmResolve};

struct PendingEntry {
    request: ConfirmRequest,
    resolve: ConfirmResolve,
}

/// Queueing `ConfirmDialog` implementation.
#[derive(Default)]
pub struct PendingConfirms {
    queue: Mutex<Vec<PendingEntry>>,
}

impl PendingConfirms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unresolved requests.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// The oldest unresolved request, if any.
    pub fn current_request(&self) -> Option<ConfirmRequest> {
        self.queue.lock().first().map(|e| e.request.clone())
    }

    /// Resolve the oldest pending request. Returns false if none is pending.
    /// The stored callback runs outside the queue lock, so it may open
    /// another dialog or dispatch page events.
    pub fn resolve_next(&self, outcome: ConfirmOutcome) -> bool {
        let entry = {
            let mut queue = self.queue.lock();
            if queue.is_empty() {
                return false;
            }
            queue.remove(0)
        };
        debug!(title = %entry.request.title, outcome = ?outcome, "Confirm dialog resolved");
        (entry.resolve)(outcome);
        true
    }
}

impl ConfirmDialog for PendingConfirms {
    fn show(&self, request: ConfirmRequest, resolve: ConfirmResolve) {
        debug!(title = %request.title, "Confirm dialog opened");
        self.queue.lock().push(PendingEntry { request, resolve });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfirmText;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn request() -> ConfirmRequest {
        ConfirmRequest::from_text(&ConfirmText::default())
    }

    #[test]
    fn test_resolve_without_pending_is_false() {
        let dialogs = PendingConfirms::new();
        assert!(!dialogs.resolve_next(ConfirmOutcome::Confirmed));
    }

    #[test]
    fn test_resolves_in_fifo_order() {
        let dialogs = PendingConfirms::new();
        let outcomes = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second"] {
            let outcomes = outcomes.clone();
            dialogs.show(
                request(),
                Box::new(move |outcome| outcomes.lock().push((label, outcome))),
            );
        }
        assert_eq!(dialogs.pending(), 2);

        dialogs.resolve_next(ConfirmOutcome::Cancelled);
        dialogs.resolve_next(ConfirmOutcome::Confirmed);
        assert_eq!(
            *outcomes.lock(),
            vec![
                ("first", ConfirmOutcome::Cancelled),
                ("second", ConfirmOutcome::Confirmed)
            ]
        );
    }

    #[test]
    fn test_each_callback_runs_once() {
        let dialogs = PendingConfirms::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counted = count.clone();
        dialogs.show(
            request(),
            Box::new(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(dialogs.resolve_next(ConfirmOutcome::Confirmed));
        assert!(!dialogs.resolve_next(ConfirmOutcome::Confirmed));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_request_carries_fixed_strings() {
        let dialogs = PendingConfirms::new();
        dialogs.show(request(), Box::new(|_| {}));
        let req = dialogs.current_request().unwrap();
        assert_eq!(req.icon, super::super::ConfirmIcon::Warning);
        assert!(!req.title.is_empty());
        assert!(!req.confirm_label.is_empty());
        assert!(!req.cancel_label.is_empty());
    }
}
