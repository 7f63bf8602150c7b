//! Scan payloads and the lookup queries built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decoded barcode as reported by the capture pipeline.
///
/// Lives only for one translation; the controller discards it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedScan {
    /// The decoded payload, verbatim.
    pub raw_value: String,
    /// Vendor symbology identifier, e.g. `org.iso.QRCode`.
    pub symbology_tag: String,
}

impl DecodedScan {
    /// Creates a decoded scan.
    #[must_use]
    pub fn new(raw_value: impl Into<String>, symbology_tag: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            symbology_tag: symbology_tag.into(),
        }
    }

    /// An empty payload counts as a failed scan.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_value.is_empty()
    }
}

/// Canonical lookup key sent to the remote data layer.
///
/// Either a bare asset identifier or an identifier search such as
/// `[identifiers.ean13]=4006381333931`. Used verbatim; no further structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryString(String);

impl QueryString {
    /// Wraps an already-built query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    /// Returns the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How the data layer should resolve a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// The query is an asset identifier; fetch the asset directly.
    AssetId,
    /// The query must go through an event search first.
    EventSearch,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetId => f.write_str("asset-id"),
            Self::EventSearch => f.write_str("event-search"),
        }
    }
}
