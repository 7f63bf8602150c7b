//! Query construction and classification.

use crate::symbology::normalize_symbology;
use ambrosus_types::{DecodedScan, QueryKind, QueryString};
use tracing::debug;

/// URL prefixes whose remainder is a bare asset identifier.
pub const AMB_URL_PREFIXES: [&str; 2] = ["http://amb.to/", "https://amb.to/"];

/// GS1 application identifiers and the query fragments that replace them.
pub const GS1_IDENTIFIERS: [(&str, &str); 4] = [
    ("(01)", "[identifiers.gtin]="),
    ("(21)", "&[identifiers.sn]="),
    ("(10)", "&[identifiers.batch]="),
    ("(17)", "&[identifiers.expiry]="),
];

const QR_CODE: &str = "qrcode";
const DATA_MATRIX: &str = "datamatrix";

/// Builds the canonical lookup query for a payload of the given short
/// symbology name.
///
/// The payload is lower-cased first; a missing payload counts as empty.
///
/// - `qrcode`: an `amb.to` URL yields the bare identifier after the prefix,
///   anything else yields `qrcode:<value>`
/// - `datamatrix`: GS1 identifiers `(01) (21) (10) (17)` are rewritten into
///   `[identifiers.*]=` fragments; unknown identifiers pass through
/// - anything else: `[identifiers.<symbology>]=<value>`
#[must_use]
pub fn build_query(barcode_value: Option<&str>, symbology: &str) -> String {
    let value = barcode_value.unwrap_or_default().to_lowercase();

    match symbology {
        QR_CODE => AMB_URL_PREFIXES
            .iter()
            .find_map(|prefix| value.strip_prefix(prefix))
            .map(str::to_string)
            .unwrap_or_else(|| format!("{symbology}:{value}")),
        DATA_MATRIX => GS1_IDENTIFIERS
            .iter()
            .fold(value, |acc, (ai, fragment)| acc.replace(ai, fragment)),
        _ => format!("[identifiers.{symbology}]={value}"),
    }
}

/// Decides how a built query must be resolved.
///
/// A query is an asset id only when the symbology is `qrcode` and the query
/// no longer contains the symbology name. The `qrcode:` fallback therefore
/// always goes to event search, and so would an asset id that happens to
/// contain the text `qrcode`.
#[must_use]
pub fn classify_query(symbology: &str, query: &str) -> QueryKind {
    if symbology == QR_CODE && !query.contains(symbology) {
        QueryKind::AssetId
    } else {
        QueryKind::EventSearch
    }
}

/// A scan after translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedScan {
    /// Vendor tag as reported by the capture pipeline.
    pub vendor_tag: String,
    /// Normalized short symbology name.
    pub symbology: String,
    pub query: QueryString,
    pub kind: QueryKind,
}

/// Normalizes, builds and classifies in one step.
#[must_use]
pub fn translate(scan: &DecodedScan) -> TranslatedScan {
    let symbology = normalize_symbology(&scan.symbology_tag);
    let query = build_query(Some(&scan.raw_value), &symbology);
    let kind = classify_query(&symbology, &query);
    debug!(symbology = %symbology, query = %query, kind = %kind, "translated scan");

    TranslatedScan {
        vendor_tag: scan.symbology_tag.clone(),
        symbology,
        query: QueryString::new(query),
        kind,
    }
}
