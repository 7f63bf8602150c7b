//! Asset and event records returned by the data-access layer.

use crate::FormattedSection;
use serde::{Deserialize, Serialize};

/// A tracked asset on the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(default)]
    pub formatted_sections: Vec<FormattedSection>,
}

impl Asset {
    /// Creates an asset with no sections.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            formatted_sections: Vec::new(),
        }
    }

    /// Appends a formatted section.
    pub fn with_section(mut self, section: FormattedSection) -> Self {
        self.formatted_sections.push(section);
        self
    }
}

/// An event recorded against an asset.
///
/// Geolocation is optional. A record without both coordinates simply has no
/// map; that is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEvent {
    pub id: String,
    pub asset_id: String,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub formatted_sections: Vec<FormattedSection>,
}

impl AssetEvent {
    /// Creates an event for the given asset.
    #[must_use]
    pub fn new(id: impl Into<String>, asset_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            asset_id: asset_id.into(),
            ..Default::default()
        }
    }

    /// Display title: the name, falling back to the type.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        self.name.as_deref().or(self.event_type.as_deref())
    }

    /// Both coordinates, when the event carries a location.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}
