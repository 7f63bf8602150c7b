//! Symbology tags and their short names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short name returned when a vendor tag yields nothing usable.
pub const UNKNOWN_SYMBOLOGY: &str = "unknown";

/// Reduces a vendor symbology tag to its short name.
///
/// Takes the last dot-delimited segment, lower-cases it and strips hyphens:
/// `org.gs1.EAN-13` becomes `ean13`. An empty input, or one whose last
/// segment ends up empty, yields [`UNKNOWN_SYMBOLOGY`].
#[must_use]
pub fn normalize_symbology(raw: &str) -> String {
    let short: String = raw
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
        .replace('-', "");
    if short.is_empty() {
        UNKNOWN_SYMBOLOGY.to_string()
    } else {
        short
    }
}

/// The barcode symbologies the scanner is configured to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    QrCode,
    DataMatrix,
    Ean13,
    Ean8,
    UpcE,
    Code39,
    Code39Mod43,
    Code93,
    Code128,
    Pdf417,
    Aztec,
    Interleaved2of5,
    Itf14,
}

impl Symbology {
    /// Every supported symbology, in scanner configuration order.
    pub const ALL: [Symbology; 13] = [
        Self::QrCode,
        Self::DataMatrix,
        Self::Ean13,
        Self::Ean8,
        Self::UpcE,
        Self::Code39,
        Self::Code39Mod43,
        Self::Code93,
        Self::Code128,
        Self::Pdf417,
        Self::Aztec,
        Self::Interleaved2of5,
        Self::Itf14,
    ];

    /// The identifier the capture pipeline reports for this symbology.
    #[must_use]
    pub const fn vendor_tag(self) -> &'static str {
        match self {
            Self::QrCode => "org.iso.QRCode",
            Self::DataMatrix => "org.iso.DataMatrix",
            Self::Ean13 => "org.gs1.EAN-13",
            Self::Ean8 => "org.gs1.EAN-8",
            Self::UpcE => "org.gs1.UPC-E",
            Self::Code39 => "org.iso.Code39",
            Self::Code39Mod43 => "org.iso.Code39Mod43",
            Self::Code93 => "com.intermec.Code93",
            Self::Code128 => "org.iso.Code128",
            Self::Pdf417 => "org.iso.PDF417",
            Self::Aztec => "org.iso.Aztec",
            Self::Interleaved2of5 => "org.ansi.Interleaved2of5",
            Self::Itf14 => "org.gs1.ITF14",
        }
    }

    /// The normalized short name, as produced by [`normalize_symbology`].
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::QrCode => "qrcode",
            Self::DataMatrix => "datamatrix",
            Self::Ean13 => "ean13",
            Self::Ean8 => "ean8",
            Self::UpcE => "upce",
            Self::Code39 => "code39",
            Self::Code39Mod43 => "code39mod43",
            Self::Code93 => "code93",
            Self::Code128 => "code128",
            Self::Pdf417 => "pdf417",
            Self::Aztec => "aztec",
            Self::Interleaved2of5 => "interleaved2of5",
            Self::Itf14 => "itf14",
        }
    }

    /// Looks up a symbology by short name.
    #[must_use]
    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.short_name() == name)
    }

    /// Looks up a symbology by vendor tag, going through normalization.
    #[must_use]
    pub fn from_vendor_tag(tag: &str) -> Option<Self> {
        Self::from_short_name(&normalize_symbology(tag))
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
