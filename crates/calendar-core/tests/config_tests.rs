//! Tests for configuration loading and checks.

use calendar_core::{CalendarConfig, CalendarError};

#[test]
fn empty_document_yields_defaults() {
    let config = CalendarConfig::from_json("{}").unwrap();
    assert_eq!(config, CalendarConfig::default());
    assert_eq!(config.max_title_chars, 100);
    assert_eq!(config.max_description_chars, 500);
    assert_eq!(config.visible_events_per_cell, 3);
    assert_eq!(config.default_duration_minutes, 60);
}

#[test]
fn partial_document_overrides_named_fields() {
    let config =
        CalendarConfig::from_json(r#"{"visible_events_per_cell": 5, "id_prefix": "cal"}"#)
            .unwrap();

    assert_eq!(config.visible_events_per_cell, 5);
    assert_eq!(config.id_prefix, "cal");
    assert_eq!(config.default_color, "#3b82f6");
}

#[test]
fn zero_limits_are_rejected() {
    let err = CalendarConfig::from_json(r#"{"max_title_chars": 0}"#).unwrap_err();
    assert!(matches!(err, CalendarError::InvalidConfig(_)));

    let err = CalendarConfig::from_json(r#"{"default_duration_minutes": -15}"#).unwrap_err();
    assert!(err.to_string().contains("default_duration_minutes"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = CalendarConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, CalendarError::Json(_)));
}
