use super::*;

#[test]
fn defaults_match_stock_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_toggle_id, "themeToggle");
    assert_eq!(config.theme_icon_id, "themeIcon");
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.scroll_top_id, "scrollTop");
    assert_eq!(config.nav_link_selector, "nav ul li a");
    assert_eq!(config.home_page, "index.html");
    assert_eq!(config.form_fields.name, "nombre");
    assert_eq!(config.form_fields.message, "mensaje");
    assert!(config.validate().is_ok());
}

#[test]
fn default_timings_use_fixed_constants() {
    let t = Timings::default();
    assert_eq!(t.scroll_threshold_px, 300.0);
    assert_eq!(t.notification_display_ms, 3000);
    assert_eq!(t.notification_exit_ms, 300);
    assert_eq!(t.ripple_ms, 600);
    assert_eq!(t.icon_feedback_ms, 300);
    assert_eq!(t.reveal_delay_ms, 100);
    assert_eq!(t.reveal_threshold, 0.1);
    assert_eq!(t.reveal_root_margin, "0px 0px -50px 0px");
}

#[test]
fn from_json_keeps_defaults_for_missing_keys() {
    let config = SiteConfig::from_json(r#"{ "scrollTopId": "toTop", "timings": { "rippleMs": 400 } }"#)
        .expect("partial config should parse");
    assert_eq!(config.scroll_top_id, "toTop");
    assert_eq!(config.timings.ripple_ms, 400);
    assert_eq!(config.timings.notification_display_ms, 3000);
    assert_eq!(config.theme_toggle_id, "themeToggle");
}

#[test]
fn from_json_accepts_empty_object() {
    let config = SiteConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = SiteConfig::from_json("{ not json").expect_err("malformed json should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn validate_rejects_threshold_out_of_range() {
    let err = SiteConfig::from_json(r#"{ "timings": { "revealThreshold": 1.5 } }"#)
        .expect_err("threshold above 1 should fail");
    assert!(err.to_string().contains("revealThreshold"));
}

#[test]
fn validate_rejects_zero_display_duration() {
    let mut config = SiteConfig::default();
    config.timings.notification_display_ms = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn validate_rejects_blank_field_id() {
    let mut config = SiteConfig::default();
    config.form_fields.email = "  ".into();
    let err = config.validate().expect_err("blank id should fail");
    assert!(err.to_string().contains("formFields.email"));
}
