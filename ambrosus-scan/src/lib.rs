//! Barcode symbology to lookup query translation.
//!
//! Turns a decoded scan (payload + vendor symbology tag) into the canonical
//! query string used against the Ambrosus network:
//!
//! - [`normalize_symbology`] reduces a vendor tag such as `org.gs1.EAN-13`
//!   to a short name (`ean13`)
//! - [`build_query`] builds the query for that short name
//! - [`classify_query`] decides whether the query is a direct asset id or
//!   needs an event search
//!
//! Everything here is pure and deterministic.
//!
//! # Example
//!
//! ```
//! use ambrosus_scan::{translate, QueryKind};
//! use ambrosus_types::DecodedScan;
//!
//! let scan = DecodedScan::new("https://amb.to/0xabc", "org.iso.QRCode");
//! let translated = translate(&scan);
//! assert_eq!(translated.query.as_str(), "0xabc");
//! assert_eq!(translated.kind, QueryKind::AssetId);
//! ```

mod query;
mod symbology;

pub use ambrosus_types::{QueryKind, QueryString};
pub use query::{
    build_query, classify_query, translate, TranslatedScan, AMB_URL_PREFIXES, GS1_IDENTIFIERS,
};
pub use symbology::{normalize_symbology, Symbology, UNKNOWN_SYMBOLOGY};
