//! Detail screen view models.
//!
//! Each binds a record's formatted sections to a [`SectionLayout`]. Binding a
//! new record replaces everything, map included.

use ambrosus_layout::{LayoutMetrics, MapRegion, SectionLayout, SectionRenderer};
use ambrosus_types::{Asset, AssetEvent};

/// View model for one event's detail screen.
#[derive(Debug, Clone)]
pub struct EventDetails {
    title: String,
    map: Option<MapRegion>,
    layout: SectionLayout,
}

impl EventDetails {
    pub fn new(event: &AssetEvent, metrics: LayoutMetrics) -> Self {
        let mut details = Self {
            title: String::new(),
            map: None,
            layout: SectionLayout::new(metrics),
        };
        details.bind_event(event);
        details
    }

    /// Replaces the displayed event.
    pub fn bind_event(&mut self, event: &AssetEvent) {
        self.title = event.display_title().unwrap_or_default().to_string();
        self.map = MapRegion::from_event(event);
        self.layout.bind(event.formatted_sections.clone());
    }

    /// Screen title: event name, else event type.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The map for the location section; `None` without geolocation.
    pub fn map(&self) -> Option<&MapRegion> {
        self.map.as_ref()
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// Applies section `index` to a rendering surface.
    pub fn render_section<R: SectionRenderer + ?Sized>(
        &self,
        index: usize,
        viewport_width: f64,
        renderer: &mut R,
    ) {
        self.layout
            .render(index, viewport_width, self.map.as_ref(), renderer);
    }
}

/// View model for an asset's detail screen.
#[derive(Debug, Clone)]
pub struct AssetDetails {
    asset_id: String,
    layout: SectionLayout,
}

impl AssetDetails {
    pub fn new(asset: &Asset, metrics: LayoutMetrics) -> Self {
        let mut layout = SectionLayout::new(metrics);
        layout.bind(asset.formatted_sections.clone());
        Self {
            asset_id: asset.id.clone(),
            layout,
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// Assets have no map; a location section renders empty.
    pub fn render_section<R: SectionRenderer + ?Sized>(
        &self,
        index: usize,
        viewport_width: f64,
        renderer: &mut R,
    ) {
        self.layout.render(index, viewport_width, None, renderer);
    }
}
