//! Configuration type definitions
//!
//! This module contains all the struct definitions for configuration.

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Selector names, storage keys, and timing knobs for the behavior layer.
///
/// Every field has a default matching the Zero Garden markup, so an empty
/// config file (or no file at all) yields the stock behavior set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorConfig {
    /// Marker class for fade-in-on-scroll cards (default: "plant-card")
    #[serde(default = "default_plant_card_class")]
    pub plant_card_class: String,
    /// Class applied once a card becomes visible (default: "fade-in")
    #[serde(default = "default_fade_in_class")]
    pub fade_in_class: String,
    /// Visible fraction that counts as on-screen (default: 0.1)
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f32,

    /// Marker class for the dismissible alert region (default: "alert")
    #[serde(default = "default_alert_class")]
    pub alert_class: String,
    /// Auto-dismiss delay for the alert in milliseconds (default: 5000)
    #[serde(default = "default_alert_dismiss_ms")]
    pub alert_dismiss_ms: u64,

    /// DOM id of the theme toggle control (default: "toggleTheme")
    #[serde(default = "default_theme_toggle_id")]
    pub theme_toggle_id: String,
    /// Body class for dark mode (default: "dark-mode")
    #[serde(default = "default_dark_mode_class")]
    pub dark_mode_class: String,
    /// Storage key for the persisted theme flag (default: "theme")
    #[serde(default = "default_theme_storage_key")]
    pub theme_storage_key: String,

    /// DOM id of the submit loading indicator (default: "loadingSpinner")
    #[serde(default = "default_spinner_id")]
    pub spinner_id: String,
    /// Class that hides the loading indicator (default: "d-none")
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,

    /// Marker class for destructive-action controls (default: "btn-danger")
    #[serde(default = "default_danger_class")]
    pub danger_class: String,
    /// Opt-out data attribute for confirmation (default: "data-confirm")
    #[serde(default = "default_confirm_attr")]
    pub confirm_attr: String,
    /// Fallback navigation-target attribute (default: "data-href")
    #[serde(default = "default_href_fallback_attr")]
    pub href_fallback_attr: String,

    /// DOM id of the toast container (default: "liveToast")
    #[serde(default = "default_toast_container_id")]
    pub toast_container_id: String,
    /// Class of the toast message body element (default: "toast-body")
    #[serde(default = "default_toast_body_class")]
    pub toast_body_class: String,
    /// Class applied while a toast is displayed (default: "show")
    #[serde(default = "default_toast_show_class")]
    pub toast_show_class: String,
    /// Toast display duration in milliseconds (default: 5000)
    #[serde(default = "default_toast_hide_ms")]
    pub toast_hide_ms: u64,

    /// Fixed confirmation-dialog strings
    #[serde(default)]
    pub confirm_text: ConfirmText,
}

/// Title, body, and button labels for the destructive-action dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmText {
    #[serde(default = "default_confirm_title")]
    pub title: String,
    #[serde(default = "default_confirm_body")]
    pub body: String,
    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,
    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,
}

fn default_plant_card_class() -> String {
    DEFAULT_PLANT_CARD_CLASS.to_string()
}
fn default_fade_in_class() -> String {
    DEFAULT_FADE_IN_CLASS.to_string()
}
fn default_visibility_threshold() -> f32 {
    DEFAULT_VISIBILITY_THRESHOLD
}
fn default_alert_class() -> String {
    DEFAULT_ALERT_CLASS.to_string()
}
fn default_alert_dismiss_ms() -> u64 {
    DEFAULT_ALERT_DISMISS_MS
}
fn default_theme_toggle_id() -> String {
    DEFAULT_THEME_TOGGLE_ID.to_string()
}
fn default_dark_mode_class() -> String {
    DEFAULT_DARK_MODE_CLASS.to_string()
}
fn default_theme_storage_key() -> String {
    DEFAULT_THEME_STORAGE_KEY.to_string()
}
fn default_spinner_id() -> String {
    DEFAULT_SPINNER_ID.to_string()
}
fn default_hidden_class() -> String {
    DEFAULT_HIDDEN_CLASS.to_string()
}
fn default_danger_class() -> String {
    DEFAULT_DANGER_CLASS.to_string()
}
fn default_confirm_attr() -> String {
    DEFAULT_CONFIRM_ATTR.to_string()
}
fn default_href_fallback_attr() -> String {
    DEFAULT_HREF_FALLBACK_ATTR.to_string()
}
fn default_toast_container_id() -> String {
    DEFAULT_TOAST_CONTAINER_ID.to_string()
}
fn default_toast_body_class() -> String {
    DEFAULT_TOAST_BODY_CLASS.to_string()
}
fn default_toast_show_class() -> String {
    DEFAULT_TOAST_SHOW_CLASS.to_string()
}
fn default_toast_hide_ms() -> u64 {
    DEFAULT_TOAST_HIDE_MS
}
fn default_confirm_title() -> String {
    DEFAULT_CONFIRM_TITLE.to_string()
}
fn default_confirm_body() -> String {
    DEFAULT_CONFIRM_BODY.to_string()
}
fn default_confirm_label() -> String {
    DEFAULT_CONFIRM_LABEL.to_string()
}
fn default_cancel_label() -> String {
    DEFAULT_CANCEL_LABEL.to_string()
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            plant_card_class: default_plant_card_class(),
            fade_in_class: default_fade_in_class(),
            visibility_threshold: default_visibility_threshold(),
            alert_class: default_alert_class(),
            alert_dismiss_ms: default_alert_dismiss_ms(),
            theme_toggle_id: default_theme_toggle_id(),
            dark_mode_class: default_dark_mode_class(),
            theme_storage_key: default_theme_storage_key(),
            spinner_id: default_spinner_id(),
            hidden_class: default_hidden_class(),
            danger_class: default_danger_class(),
            confirm_attr: default_confirm_attr(),
            href_fallback_attr: default_href_fallback_attr(),
            toast_container_id: default_toast_container_id(),
            toast_body_class: default_toast_body_class(),
            toast_show_class: default_toast_show_class(),
            toast_hide_ms: default_toast_hide_ms(),
            confirm_text: ConfirmText::default(),
        }
    }
}

impl Default for ConfirmText {
    fn default() -> Self {
        ConfirmText {
            title: default_confirm_title(),
            body: default_confirm_body(),
            confirm_label: default_confirm_label(),
            cancel_label: default_cancel_label(),
        }
    }
}
