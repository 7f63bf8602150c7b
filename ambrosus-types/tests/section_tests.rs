use ambrosus_types::{Error, FormattedSection, LOCATION_SECTION_TITLE};
use serde_json::json;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn builder_preserves_field_order() {
    let s = FormattedSection::new("ambrosus.asset.info")
        .with_field("zeta", "last")
        .with_field("alpha", "first")
        .with_field("mid", 3);
    let keys: Vec<&str> = s.fields.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    assert_eq!(s.len(), 3);
    assert!(!s.is_empty());
}

#[test]
fn location_title_is_exact() {
    assert!(FormattedSection::new(LOCATION_SECTION_TITLE).is_location());
    assert!(!FormattedSection::new("ambrosus.event.location.extra").is_location());
    assert!(!FormattedSection::new("Ambrosus.Event.Location").is_location());
    assert!(!FormattedSection::new("").is_location());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn deserializes_single_entry_object() {
    let json = r#"{"ambrosus.event.info": {"name": "Harvest", "quantity": 12}}"#;
    let s: FormattedSection = serde_json::from_str(json).unwrap();
    assert_eq!(s.title, "ambrosus.event.info");
    assert_eq!(s.fields["name"], json!("Harvest"));
    assert_eq!(s.fields["quantity"], json!(12));
}

#[test]
fn serializes_back_to_single_entry_object() {
    let s = FormattedSection::new("t").with_field("k", "v");
    let value = serde_json::to_value(&s).unwrap();
    assert_eq!(value, json!({"t": {"k": "v"}}));
}

#[test]
fn rejects_empty_object() {
    let err = serde_json::from_str::<FormattedSection>("{}").unwrap_err();
    assert!(err.to_string().contains("found 0"));
}

#[test]
fn rejects_multiple_titles() {
    let json = r#"{"a": {}, "b": {}}"#;
    let err = serde_json::from_str::<FormattedSection>(json).unwrap_err();
    assert!(err.to_string().contains("found 2"));
}

#[test]
fn rejects_non_object_fields() {
    let json = r#"{"a": [1, 2]}"#;
    let err = serde_json::from_str::<FormattedSection>(json).unwrap_err();
    assert!(err.to_string().contains("expected an object"));
}

#[test]
fn list_from_json_keeps_section_order() {
    let json = r#"[
        {"ambrosus.event.info": {"name": "x"}},
        {"ambrosus.event.location": {"lat": 1.0}},
        {"ambrosus.event.extra": {}}
    ]"#;
    let sections = FormattedSection::list_from_json(json).unwrap();
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["ambrosus.event.info", "ambrosus.event.location", "ambrosus.event.extra"]
    );
}

#[test]
fn list_from_json_reports_serialization_error() {
    let err = FormattedSection::list_from_json("not json").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn error_display_invalid_section() {
    let err = Error::InvalidSection { entries: 3 };
    assert!(format!("{err}").contains("exactly one"));
    assert!(format!("{err}").contains('3'));
}
