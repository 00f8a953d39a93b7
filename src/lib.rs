//! Zero Garden UI - headless page-behavior layer
//!
//! This library models the client-side behavior layer of the Zero Garden
//! pages: fade-in-on-scroll cards, a persisted dark-mode toggle, form-submit
//! spinners, destructive-action confirmation, and a toast helper. The page is
//! a retained element tree driven by explicit events; widget libraries are
//! injected optional capabilities.

pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use behaviors::{PageBehaviors, Toasts};
pub use config::BehaviorConfig;
pub use dom::{ElementId, Navigation, Page, Tag};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StoreHandle};
pub use theme::ThemeMode;
pub use widgets::{
    AlertKit, ConfirmDialog, ConfirmOutcome, ConfirmRequest, PendingConfirms, ToastKit,
    ToastVariant, WidgetCapabilities,
};
