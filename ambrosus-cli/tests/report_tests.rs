use ambrosus_cli::{
    instructions_report, layout_report, layout_report_from_json, outcome_report, resolve_scan,
    TranslationReport,
};
use ambrosus_layout::SectionLayout;
use ambrosus_types::{DecodedScan, FormattedSection, QueryKind, LOCATION_SECTION_TITLE};
use ambrosus_viewer::mock::Records;
use ambrosus_viewer::{ScanOutcome, ViewerConfig};

const RECORDS: &str = r#"{
    "assets": [
        {"id": "0xabc", "formattedSections": [{"ambrosus.asset.info": {"name": "Pallet", "weight": 12}}]}
    ],
    "events": {
        "[identifiers.gtin]=0001&[identifiers.sn]=s1": [{"id": "e1", "assetId": "0xabc"}]
    }
}"#;

// ── translate ────────────────────────────────────────────────────

#[test]
fn translation_report_text() {
    let report = TranslationReport::new("XYZ789", "org.gs1.EAN-13");
    assert_eq!(report.kind, QueryKind::EventSearch);
    assert_eq!(
        report.to_text(),
        "symbology: ean13\nquery:     [identifiers.ean13]=xyz789\nkind:      event-search\n"
    );
}

#[test]
fn translation_report_json() {
    let report = TranslationReport::new("https://amb.to/0xabc", "org.iso.QRCode");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["query"], "0xabc");
    assert_eq!(json["kind"], "asset_id");
}

// ── layout ───────────────────────────────────────────────────────

#[test]
fn layout_report_lists_sections_and_rows() {
    let layout = SectionLayout::with_sections(vec![
        FormattedSection::new("ambrosus.event.info")
            .with_field("name", "Harvest")
            .with_field("gone", serde_json::Value::Null),
        FormattedSection::new(LOCATION_SECTION_TITLE).with_field("city", "Berlin"),
    ]);
    assert_eq!(
        layout_report(&layout, 320.0),
        "[0] ambrosus.event.info items=2 size=320x142\n    name: Harvest\n\
         [1] ambrosus.event.location items=1 size=320x320\n    (map)\n"
    );
}

#[test]
fn layout_report_from_json_uses_config_width() {
    let config = ViewerConfig {
        viewport_width: 400.0,
        ..ViewerConfig::default()
    };
    let out = layout_report_from_json(r#"[{"s": {"a": 1, "b": 2, "c": 3}}]"#, &config).unwrap();
    assert!(out.starts_with("[0] s items=3 size=400x188\n"));
}

#[test]
fn layout_report_from_json_rejects_bad_sections() {
    let err = layout_report_from_json(r#"[{"a": {}, "b": {}}]"#, &ViewerConfig::default());
    assert!(err.is_err());
}

// ── resolve ──────────────────────────────────────────────────────

#[tokio::test]
async fn resolve_datamatrix_through_events() {
    let records = Records::from_json(RECORDS).unwrap();
    let outcome = resolve_scan(
        records,
        DecodedScan::new("(01)0001(21)S1", "org.iso.DataMatrix"),
        &ViewerConfig::default(),
    )
    .await
    .unwrap();
    assert!(matches!(outcome, ScanOutcome::Display(_)));

    let out = outcome_report(&outcome, &ViewerConfig::default());
    assert!(out.starts_with("asset 0xabc\n[0] ambrosus.asset.info items=2 size=375x142\n"));
    assert!(out.contains("    weight: 12\n"));
}

#[tokio::test]
async fn resolve_unknown_reports_notice() {
    let records = Records::from_json(RECORDS).unwrap();
    let outcome = resolve_scan(
        records,
        DecodedScan::new("nothing", "org.iso.QRCode"),
        &ViewerConfig::default(),
    )
    .await
    .unwrap();
    assert_eq!(
        outcome_report(&outcome, &ViewerConfig::default()),
        "Scanned org.iso.QRCode code\n\
         Failed to find Ambrosus Asset from request with query: qrcode:nothing\n"
    );
}

#[tokio::test]
async fn resolve_with_zero_channel_capacity() {
    let records = Records::from_json(RECORDS).unwrap();
    let config = ViewerConfig::from_json(r#"{"channel_capacity": 0}"#).unwrap();
    let outcome = resolve_scan(
        records,
        DecodedScan::new("https://amb.to/0xabc", "org.iso.QRCode"),
        &config,
    )
    .await
    .unwrap();
    assert!(matches!(outcome, ScanOutcome::Display(asset) if asset.id == "0xabc"));
}

#[test]
fn records_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, RECORDS).unwrap();
    let records = Records::load(&path).unwrap();
    assert_eq!(records.assets.len(), 1);
}

// ── instructions ─────────────────────────────────────────────────

#[test]
fn instructions_on_first_launch() {
    let out = instructions_report(&ViewerConfig::default(), true, false).unwrap();
    assert!(out.starts_with("Instructions\n"));
    assert!(out.contains(ambrosus_viewer::DEFAULT_SAMPLES_URL));
}

#[test]
fn instructions_skipped_once_shown() {
    assert_eq!(instructions_report(&ViewerConfig::default(), true, true), None);
}

#[test]
fn instructions_skipped_when_disabled() {
    let config = ViewerConfig::from_json(r#"{"show_instructions_on_first_launch": false}"#).unwrap();
    assert_eq!(instructions_report(&config, true, false), None);
}

#[test]
fn instructions_on_request_ignore_launch_rule() {
    let config = ViewerConfig {
        show_instructions_on_first_launch: false,
        samples_url: "https://example.org/samples".to_string(),
        ..ViewerConfig::default()
    };
    let out = instructions_report(&config, false, true).unwrap();
    assert!(out.contains("https://example.org/samples"));
}
