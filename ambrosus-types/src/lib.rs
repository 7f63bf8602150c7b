//! Core type definitions for the Ambrosus viewer.
//!
//! This crate defines the plain data shared by the scan translator, the
//! section layout engine and the viewer controller:
//! - Decoded scans and the query strings derived from them
//! - Server-defined formatted sections (title → ordered fields)
//! - Asset and event records as returned by the data-access layer
//!
//! Nothing here performs I/O. Records arrive already parsed from the
//! remote network; this crate only gives them a shape.

mod record;
mod scan;
mod section;

pub use record::{Asset, AssetEvent};
pub use scan::{DecodedScan, QueryKind, QueryString};
pub use section::{FormattedSection, LOCATION_SECTION_TITLE};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid section: expected exactly one title entry, found {entries}")]
    InvalidSection { entries: usize },

    #[error("invalid section fields for {title:?}: expected an object")]
    InvalidSectionFields { title: String },
}
