use ambrosus_types::AssetEvent;
use serde::{Deserialize, Serialize};

/// Latitude/longitude span of the event map, in degrees.
/// Lower values zoom closer to the coordinates.
pub const MAP_SPAN_DELTA: f64 = 0.0015;

/// The region and pin shown in place of the location section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
    /// Title of the pin at the center.
    pub annotation_title: Option<String>,
}

impl MapRegion {
    /// A region centered on the coordinates with the default span.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            latitude_delta: MAP_SPAN_DELTA,
            longitude_delta: MAP_SPAN_DELTA,
            annotation_title: None,
        }
    }

    pub fn with_annotation_title(mut self, title: impl Into<String>) -> Self {
        self.annotation_title = Some(title.into());
        self
    }

    /// Builds the region for an event, or `None` if it has no geolocation.
    #[must_use]
    pub fn from_event(event: &AssetEvent) -> Option<Self> {
        let (latitude, longitude) = event.coordinates()?;
        Some(Self {
            annotation_title: event.location_name.clone(),
            ..Self::new(latitude, longitude)
        })
    }
}
