use ambrosus_types::{Asset, AssetEvent, DecodedScan, FormattedSection};
use ambrosus_viewer::mock::InMemoryLookup;
use ambrosus_viewer::{Notice, ScanController, ScanOutcome, ScannerState};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const QR: &str = "org.iso.QRCode";
const EAN13: &str = "org.gs1.EAN-13";

fn asset(id: &str) -> Asset {
    Asset::new(id).with_section(FormattedSection::new("ambrosus.asset.info").with_field("name", "Pallet"))
}

fn backend() -> Arc<InMemoryLookup> {
    Arc::new(
        InMemoryLookup::new()
            .with_asset(asset("0xabc"))
            .with_asset(asset("0xdef"))
            .with_events(
                "[identifiers.ean13]=4006381333931",
                vec![AssetEvent::new("e1", "0xdef"), AssetEvent::new("e2", "0xabc")],
            )
            .with_events("qrcode:plain", vec![AssetEvent::new("e3", "0xabc")])
            .with_events("[identifiers.ean8]=12345670", vec![AssetEvent::new("e4", "0xmissing")]),
    )
}

// ── Asset id path ────────────────────────────────────────────────

#[tokio::test]
async fn amb_url_resolves_asset_directly() {
    let backend = backend();
    let mut controller = ScanController::with_backend(backend.clone());

    let outcome = controller
        .handle_scan(DecodedScan::new("https://amb.to/0xABC", QR))
        .await;

    assert_eq!(outcome, ScanOutcome::Display(asset("0xabc")));
    assert_eq!(backend.calls(), vec!["asset:0xabc"]);
    assert_eq!(controller.state(), ScannerState::ShowingDetails);
}

#[tokio::test]
async fn unknown_asset_id_fails() {
    let mut controller = ScanController::with_backend(backend());

    let outcome = controller
        .handle_scan(DecodedScan::new("https://amb.to/0xnope", QR))
        .await;

    assert_eq!(
        outcome,
        ScanOutcome::Failed(Notice::scan_failure(QR, "0xnope"))
    );
    assert_eq!(controller.state(), ScannerState::ShowingFailure);
}

// ── Event search path ────────────────────────────────────────────

#[tokio::test]
async fn barcode_resolves_through_first_event() {
    let backend = backend();
    let mut controller = ScanController::with_backend(backend.clone());

    let outcome = controller
        .handle_scan(DecodedScan::new("4006381333931", EAN13))
        .await;

    assert_eq!(outcome, ScanOutcome::Display(asset("0xdef")));
    assert_eq!(
        backend.calls(),
        vec!["events:[identifiers.ean13]=4006381333931", "asset:0xdef"]
    );
}

#[tokio::test]
async fn qrcode_fallback_goes_through_event_search() {
    let backend = backend();
    let mut controller = ScanController::with_backend(backend.clone());

    let outcome = controller.handle_scan(DecodedScan::new("PLAIN", QR)).await;

    assert_eq!(outcome, ScanOutcome::Display(asset("0xabc")));
    assert_eq!(backend.calls()[0], "events:qrcode:plain");
}

#[tokio::test]
async fn no_matching_events_fails() {
    let mut controller = ScanController::with_backend(backend());

    let outcome = controller.handle_scan(DecodedScan::new("111", EAN13)).await;

    let ScanOutcome::Failed(notice) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(notice.title, "Scanned org.gs1.EAN-13 code");
    assert_eq!(
        notice.message,
        "Failed to find Ambrosus Asset from request with query: [identifiers.ean13]=111"
    );
}

#[tokio::test]
async fn event_pointing_at_missing_asset_fails() {
    let mut controller = ScanController::with_backend(backend());

    let outcome = controller
        .handle_scan(DecodedScan::new("12345670", "org.gs1.EAN-8"))
        .await;

    assert!(matches!(outcome, ScanOutcome::Failed(_)));
}

#[tokio::test]
async fn lookup_errors_become_failure_notices() {
    let backend = Arc::new(InMemoryLookup::new().with_asset(asset("0xabc")).failing());
    let mut controller = ScanController::with_backend(backend.clone());

    let outcome = controller
        .handle_scan(DecodedScan::new("https://amb.to/0xabc", QR))
        .await;

    assert_eq!(outcome, ScanOutcome::Failed(Notice::scan_failure(QR, "0xabc")));
    // No retry.
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn separate_asset_and_event_backends() {
    let assets = Arc::new(InMemoryLookup::new().with_asset(asset("0xabc")));
    let events = Arc::new(
        InMemoryLookup::new().with_events("[identifiers.code128]=x1", vec![AssetEvent::new("e", "0xabc")]),
    );
    let mut controller = ScanController::new(assets.clone(), events.clone());

    let outcome = controller
        .handle_scan(DecodedScan::new("X1", "org.iso.Code128"))
        .await;

    assert_eq!(outcome, ScanOutcome::Display(asset("0xabc")));
    assert_eq!(assets.calls(), vec!["asset:0xabc"]);
    assert_eq!(events.calls(), vec!["events:[identifiers.code128]=x1"]);
}

// ── Empty payloads ───────────────────────────────────────────────

#[tokio::test]
async fn empty_payload_fails_without_lookup() {
    let backend = backend();
    let mut controller = ScanController::with_backend(backend.clone());

    let outcome = controller.handle_scan(DecodedScan::new("", QR)).await;

    assert_eq!(outcome, ScanOutcome::Failed(Notice::scan_failure(QR, "qrcode:")));
    assert!(backend.calls().is_empty());
}

// ── Pause / resume ───────────────────────────────────────────────

#[tokio::test]
async fn scans_are_ignored_until_failure_acknowledged() {
    let backend = backend();
    let mut controller = ScanController::with_backend(backend.clone());

    controller.handle_scan(DecodedScan::new("", QR)).await;
    let ignored = controller
        .handle_scan(DecodedScan::new("https://amb.to/0xabc", QR))
        .await;
    assert_eq!(ignored, ScanOutcome::Ignored);
    assert!(backend.calls().is_empty());

    assert!(!controller.dismiss_details());
    assert!(controller.acknowledge_failure());
    assert_eq!(controller.state(), ScannerState::Scanning);

    let outcome = controller
        .handle_scan(DecodedScan::new("https://amb.to/0xabc", QR))
        .await;
    assert!(matches!(outcome, ScanOutcome::Display(_)));
}

#[tokio::test]
async fn scans_are_ignored_until_details_dismissed() {
    let mut controller = ScanController::with_backend(backend());

    controller
        .handle_scan(DecodedScan::new("https://amb.to/0xabc", QR))
        .await;
    assert_eq!(
        controller.handle_scan(DecodedScan::new("4006381333931", EAN13)).await,
        ScanOutcome::Ignored
    );

    assert!(!controller.acknowledge_failure());
    assert!(controller.dismiss_details());
    assert!(controller.state().is_scanning());
}

#[tokio::test]
async fn resume_is_unconditional() {
    let mut controller = ScanController::with_backend(backend());
    controller.handle_scan(DecodedScan::new("", QR)).await;
    controller.resume();
    assert_eq!(controller.state(), ScannerState::Scanning);
}
