//! Report builders behind the `ambrosus` command.
//!
//! Each subcommand is a thin wrapper: parse input, call into the core
//! crates, format the result here. Keeping the formatting in the library
//! lets it be tested without spawning the binary.

use ambrosus_layout::SectionLayout;
use ambrosus_scan::translate;
use ambrosus_types::{DecodedScan, FormattedSection, QueryKind};
use ambrosus_viewer::mock::{InMemoryLookup, Records};
use ambrosus_viewer::{
    spawn_scan_loop, AssetDetails, Notice, Onboarding, ScanCommand, ScanController, ScanOutcome,
    ViewerConfig, ViewerEvent,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Output of `ambrosus translate`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TranslationReport {
    pub symbology: String,
    pub query: String,
    pub kind: QueryKind,
}

impl TranslationReport {
    pub fn new(value: &str, symbology_tag: &str) -> Self {
        let translated = translate(&DecodedScan::new(value, symbology_tag));
        Self {
            symbology: translated.symbology,
            query: translated.query.into_inner(),
            kind: translated.kind,
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "symbology: {}\nquery:     {}\nkind:      {}\n",
            self.symbology, self.query, self.kind
        )
    }
}

/// Renders one line per section, followed by its rows.
pub fn layout_report(layout: &SectionLayout, viewport_width: f64) -> String {
    let mut out = String::new();
    for i in 0..layout.section_count() {
        let size = layout.size_for_section(i, viewport_width);
        out.push_str(&format!(
            "[{i}] {} items={} size={}x{}\n",
            layout.header_title(i),
            layout.item_count(i),
            size.width,
            size.height
        ));
        if layout.is_location_section(i) {
            out.push_str("    (map)\n");
            continue;
        }
        for row in layout.populate_fields(i) {
            out.push_str(&format!("    {}: {}\n", row.label, row.text));
        }
    }
    out
}

/// Parses a section list and renders it with the configured metrics.
pub fn layout_report_from_json(json: &str, config: &ViewerConfig) -> anyhow::Result<String> {
    let sections = FormattedSection::list_from_json(json)?;
    let mut layout = SectionLayout::new(config.layout);
    layout.bind(sections);
    Ok(layout_report(&layout, config.viewport_width))
}

/// Runs one scan through a scan loop backed by `records`, sized by
/// `config.channel_capacity`.
pub async fn resolve_scan(
    records: Records,
    scan: DecodedScan,
    config: &ViewerConfig,
) -> anyhow::Result<ScanOutcome> {
    let controller = ScanController::with_backend(Arc::new(InMemoryLookup::from_records(records)));
    let mut handle = spawn_scan_loop(controller, config.channel_capacity);
    handle.commands.send(ScanCommand::Scanned(scan)).await?;
    drop(handle.commands);

    let mut outcome = ScanOutcome::Ignored;
    while let Some(event) = handle.events.recv().await {
        debug!(?event, "scan loop event");
        match event {
            ViewerEvent::ShowAsset(asset) => outcome = ScanOutcome::Display(asset),
            ViewerEvent::ShowFailure(notice) => outcome = ScanOutcome::Failed(notice),
            ViewerEvent::ScanningPaused | ViewerEvent::ScanningResumed => {}
        }
    }
    handle.task.await?.reason?;
    Ok(outcome)
}

/// The instructions notice, if it should be shown.
///
/// With `launch` set this is the first-launch check: shown only when
/// `show_instructions_on_first_launch` is on and they weren't shown before.
/// Otherwise the user asked for them and they are always shown.
pub fn instructions_report(
    config: &ViewerConfig,
    launch: bool,
    already_shown: bool,
) -> Option<String> {
    let mut onboarding = Onboarding::new(already_shown);
    if launch && !onboarding.should_show_on_launch(config.show_instructions_on_first_launch) {
        return None;
    }
    Some(notice_report(&onboarding.show(&config.samples_url)))
}

fn notice_report(notice: &Notice) -> String {
    format!("{}\n{}\n", notice.title, notice.message)
}

/// Renders a resolve outcome: the asset's sections, or the notice.
pub fn outcome_report(outcome: &ScanOutcome, config: &ViewerConfig) -> String {
    match outcome {
        ScanOutcome::Display(asset) => {
            let details = AssetDetails::new(asset, config.layout);
            format!(
                "asset {}\n{}",
                details.asset_id(),
                layout_report(details.layout(), config.viewport_width)
            )
        }
        ScanOutcome::Failed(notice) => notice_report(notice),
        ScanOutcome::Ignored => "scan ignored\n".to_string(),
    }
}
