//! Injected widget capabilities.
//!
//! The behavior layer never assumes a widget library exists; each capability
//! is an optional trait object the embedder supplies. A missing capability
//! makes the dependent behavior degrade silently (the alert never auto-closes,
//! confirmation is skipped, the toast helper becomes a no-op).

mod dom_kit;
mod pending;

pub use dom_kit::{DomWidgetKit, ToastVariant};
pub use pending::PendingConfirms;

use std::sync::Arc;

use crate::config::ConfirmText;
use crate::dom::{ElementId, Page};

/// Programmatic dismissal of an alert region.
pub trait AlertKit: Send + Sync {
    fn close(&self, page: &Page, alert: ElementId);
}

/// Display behavior for a toast container. The kit owns display timing and
/// dismissal; callers only hand it the container.
pub trait ToastKit: Send + Sync {
    fn show(&self, page: &Page, container: ElementId);

    /// Tag the container with a flash-category variant before showing.
    /// Kits without variant styling ignore this.
    fn set_variant(&self, page: &Page, container: ElementId, variant: ToastVariant) {
        let _ = (page, container, variant);
    }
}

/// Outcome of a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

/// Icon shown in the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmIcon {
    Warning,
}

/// A confirmation request: fixed title, body, icon, and button labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub body: String,
    pub icon: ConfirmIcon,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmRequest {
    pub fn from_text(text: &ConfirmText) -> Self {
        Self {
            title: text.title.clone(),
            body: text.body.clone(),
            icon: ConfirmIcon::Warning,
            confirm_label: text.confirm_label.clone(),
            cancel_label: text.cancel_label.clone(),
        }
    }
}

/// Resolution callback for a confirmation dialog. Called exactly once.
pub type ConfirmResolve = Box<dyn FnOnce(ConfirmOutcome) + Send>;

/// Modal confirmation dialog. `show` must not block; the rest of the page
/// stays responsive until the host resolves the request. There is no timeout
/// path and no cancellation besides the dialog's own cancel choice.
pub trait ConfirmDialog: Send + Sync {
    fn show(&self, request: ConfirmRequest, resolve: ConfirmResolve);
}

/// The optional capabilities handed to the behavior installer.
#[derive(Clone, Default)]
pub struct WidgetCapabilities {
    pub alerts: Option<Arc<dyn AlertKit>>,
    pub toasts: Option<Arc<dyn ToastKit>>,
    pub dialogs: Option<Arc<dyn ConfirmDialog>>,
}

impl WidgetCapabilities {
    /// No capabilities at all; every dependent behavior degrades to a no-op.
    pub fn none() -> Self {
        Self::default()
    }

    /// The built-in dom-acting kit for alerts and toasts, plus a pending-queue
    /// dialog the host resolves explicitly.
    pub fn builtin(toast_show_class: &str, toast_hide_ms: u64) -> (Self, Arc<PendingConfirms>) {
        let kit = Arc::new(DomWidgetKit::new(toast_show_class, toast_hide_ms));
        let dialogs = Arc::new(PendingConfirms::new());
        (
            Self {
                alerts: Some(kit.clone()),
                toasts: Some(kit),
                dialogs: Some(dialogs.clone()),
            },
            dialogs,
        )
    }
}
