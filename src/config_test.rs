use super::*;

#[test]
fn from_options_json_reads_api_base_url() {
    let config = WidgetConfig::from_options_json(Some(r#"{"apiBaseUrl":"http://localhost:8000"}"#));
    assert_eq!(config.ok(), Some(WidgetConfig::new("http://localhost:8000")));
}

#[test]
fn from_options_json_keeps_trailing_slash() {
    let config = WidgetConfig::from_options_json(Some(r#"{"apiBaseUrl":"https://api.example.com/"}"#));
    assert_eq!(config.map(|c| c.api_base_url).ok(), Some("https://api.example.com/".to_owned()));
}

#[test]
fn from_options_json_defaults_when_missing() {
    for raw in [None, Some(""), Some("null"), Some("{}")] {
        let config = WidgetConfig::from_options_json(raw);
        assert_eq!(config.ok(), Some(WidgetConfig::default()), "raw options: {raw:?}");
    }
}

#[test]
fn from_options_json_ignores_unknown_keys() {
    let config = WidgetConfig::from_options_json(Some(r#"{"apiBaseUrl":"/api","theme":"dark"}"#));
    assert_eq!(config.ok(), Some(WidgetConfig::new("/api")));
}

#[test]
fn from_options_json_reads_phone_error_policy() {
    let config = WidgetConfig::from_options_json(Some(r#"{"hidePhoneErrorOnValid":true}"#));
    assert_eq!(config.map(|c| c.phone_error_policy).ok(), Some(PhoneErrorPolicy::HideOnValid));
}

#[test]
fn from_options_json_rejects_mistyped_values() {
    assert!(WidgetConfig::from_options_json(Some(r#"{"apiBaseUrl":42}"#)).is_err());
    assert!(WidgetConfig::from_options_json(Some("not json")).is_err());
}

#[test]
fn default_policy_keeps_error_until_timeout() {
    assert_eq!(WidgetConfig::new("").phone_error_policy, PhoneErrorPolicy::KeepUntilTimeout);
}

#[test]
fn with_phone_error_policy_overrides_default() {
    let config = WidgetConfig::new("/api").with_phone_error_policy(PhoneErrorPolicy::HideOnValid);
    assert_eq!(config.phone_error_policy, PhoneErrorPolicy::HideOnValid);
}

// =============================================================
// config_for_mount
// =============================================================

#[test]
fn config_for_mount_skips_options_without_container() {
    let read = std::cell::Cell::new(false);
    let result = config_for_mount(None::<&str>, || -> Result<Option<String>, ConfigError> {
        read.set(true);
        Ok(Some("not json".to_owned()))
    });
    assert!(matches!(result, Ok(None)));
    assert!(!read.get());
}

#[test]
fn config_for_mount_rejects_bad_options_with_container() {
    let result = config_for_mount(Some("#booking"), || -> Result<Option<String>, ConfigError> {
        Ok(Some("not json".to_owned()))
    });
    assert!(result.is_err());
}

#[test]
fn config_for_mount_pairs_container_with_config() {
    let result = config_for_mount(Some("#booking"), || -> Result<Option<String>, ConfigError> {
        Ok(Some(r#"{"apiBaseUrl":"/api"}"#.to_owned()))
    });
    assert_eq!(result.ok().flatten(), Some(("#booking", WidgetConfig::new("/api"))));
}
