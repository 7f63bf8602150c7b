//! Formatted-section layout engine for the Ambrosus viewer.
//!
//! Turns an ordered list of server-defined sections into what a detail
//! screen needs to draw them:
//! - [`LayoutMetrics`] / [`Size`] — the fixed row/padding constants and the
//!   per-section size formula
//! - [`SectionLayout`] — the bound section list and the per-index queries
//!   (count, header, size, field rows)
//! - [`format_value`] / [`Describe`] — the field value formatter
//! - [`MapRegion`] — the map substituted for the location section
//! - [`SectionRenderer`] — the adapter a rendering surface implements
//!
//! Nothing here touches a widget. The engine is recomputed on every bind and
//! holds no state beyond the currently bound sections.

mod engine;
mod format;
mod map;
mod metrics;
mod render;

pub use engine::{
    header_title, is_location_section, item_count, populate_fields, section_count,
    size_for_section, FieldRow, SectionLayout,
};
pub use format::{format_value, Describe};
pub use map::{MapRegion, MAP_SPAN_DELTA};
pub use metrics::{LayoutMetrics, Size};
pub use render::SectionRenderer;
