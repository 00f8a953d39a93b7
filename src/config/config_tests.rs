use super::*;

#[test]
fn test_default_config() {
    let config = BehaviorConfig::default();
    assert_eq!(config.plant_card_class, DEFAULT_PLANT_CARD_CLASS);
    assert_eq!(config.visibility_threshold, DEFAULT_VISIBILITY_THRESHOLD);
    assert_eq!(config.alert_dismiss_ms, DEFAULT_ALERT_DISMISS_MS);
    assert_eq!(config.danger_class, DEFAULT_DANGER_CLASS);
    assert_eq!(config.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
    assert_eq!(config.confirm_text.title, DEFAULT_CONFIRM_TITLE);
}

#[test]
fn test_config_serialization_round_trip() {
    let mut config = BehaviorConfig::default();
    config.danger_class = "btn-destroy".to_string();
    config.alert_dismiss_ms = 2500;

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: BehaviorConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.danger_class, "btn-destroy");
    assert_eq!(deserialized.alert_dismiss_ms, 2500);
    assert_eq!(deserialized.plant_card_class, config.plant_card_class);
}

#[test]
fn test_partial_json_fills_defaults() {
    let config: BehaviorConfig =
        serde_json::from_str(r#"{"spinnerId": "busyIndicator"}"#).unwrap();
    assert_eq!(config.spinner_id, "busyIndicator");
    assert_eq!(config.hidden_class, "d-none");
    assert_eq!(config.toast_container_id, "liveToast");
}

#[test]
fn test_empty_json_is_default() {
    let config: BehaviorConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.theme_toggle_id, "toggleTheme");
    assert_eq!(config.dark_mode_class, "dark-mode");
    assert_eq!(config.confirm_attr, "data-confirm");
    assert_eq!(config.href_fallback_attr, "data-href");
}

#[test]
fn test_load_config_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("nope.json"));
    assert_eq!(config.plant_card_class, DEFAULT_PLANT_CARD_CLASS);
}

#[test]
fn test_load_config_invalid_json_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    let config = load_config(&path);
    assert_eq!(config.toast_hide_ms, 5000);
}

#[test]
fn test_load_config_reads_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"darkModeClass": "night", "visibilityThreshold": 0.5}"#).unwrap();
    let config = load_config(&path);
    assert_eq!(config.dark_mode_class, "night");
    assert_eq!(config.visibility_threshold, 0.5);
}
