//! Default constant values for all configuration settings.

/// Marker class on elements that fade in when scrolled into view.
pub const DEFAULT_PLANT_CARD_CLASS: &str = "plant-card";
/// Class applied once a watched element becomes visible.
pub const DEFAULT_FADE_IN_CLASS: &str = "fade-in";
/// Visible fraction at which a watched element counts as on-screen.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.1;

/// Class marking the dismissible flash-alert region.
pub const DEFAULT_ALERT_CLASS: &str = "alert";
/// Delay before the flash alert is closed automatically.
pub const DEFAULT_ALERT_DISMISS_MS: u64 = 5000;

/// DOM id of the theme toggle control.
pub const DEFAULT_THEME_TOGGLE_ID: &str = "toggleTheme";
/// Class applied to the body while dark mode is active.
pub const DEFAULT_DARK_MODE_CLASS: &str = "dark-mode";
/// Storage key holding the persisted theme flag.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

/// DOM id of the form-submit loading indicator.
pub const DEFAULT_SPINNER_ID: &str = "loadingSpinner";
/// Class that keeps the loading indicator hidden until a submit.
pub const DEFAULT_HIDDEN_CLASS: &str = "d-none";

/// Marker class on destructive-action controls.
pub const DEFAULT_DANGER_CLASS: &str = "btn-danger";
/// Data attribute that opts a control out of confirmation when set to "false".
pub const DEFAULT_CONFIRM_ATTR: &str = "data-confirm";
/// Fallback navigation-target attribute checked after `href`.
pub const DEFAULT_HREF_FALLBACK_ATTR: &str = "data-href";

/// DOM id of the toast container.
pub const DEFAULT_TOAST_CONTAINER_ID: &str = "liveToast";
/// Class of the message-body element inside the toast container.
pub const DEFAULT_TOAST_BODY_CLASS: &str = "toast-body";
/// Class the toast kit applies while a toast is displayed.
pub const DEFAULT_TOAST_SHOW_CLASS: &str = "show";
/// How long a shown toast stays visible before the kit hides it again.
pub const DEFAULT_TOAST_HIDE_MS: u64 = 5000;

/// Fixed confirmation-dialog strings.
pub const DEFAULT_CONFIRM_TITLE: &str = "Delete this item?";
pub const DEFAULT_CONFIRM_BODY: &str = "This data cannot be restored.";
pub const DEFAULT_CONFIRM_LABEL: &str = "Yes, delete it";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";
