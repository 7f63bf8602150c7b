//! Per-section layout queries.
//!
//! The free functions work on any section slice with the default metrics.
//! [`SectionLayout`] binds a section list and custom metrics for a detail
//! screen.
//!
//! All index arguments must be in `0..section_count`. An out-of-range index
//! is a caller bug and panics.

use crate::format::format_value;
use crate::{LayoutMetrics, MapRegion, SectionRenderer, Size};
use ambrosus_types::FormattedSection;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One rendered key/value row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRow {
    pub label: String,
    pub text: String,
}

impl FieldRow {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Number of sections.
#[must_use]
pub fn section_count(sections: &[FormattedSection]) -> usize {
    sections.len()
}

/// Number of fields in the section at `index`.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[must_use]
pub fn item_count(sections: &[FormattedSection], index: usize) -> usize {
    sections[index].len()
}

/// Whether the section at `index` is the location section.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[must_use]
pub fn is_location_section(sections: &[FormattedSection], index: usize) -> bool {
    sections[index].is_location()
}

/// Size of the section at `index` with the default metrics.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[must_use]
pub fn size_for_section(sections: &[FormattedSection], index: usize, viewport_width: f64) -> Size {
    section_size(&sections[index], &LayoutMetrics::default(), viewport_width)
}

/// Header label of the section at `index`.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[must_use]
pub fn header_title(sections: &[FormattedSection], index: usize) -> &str {
    &sections[index].title
}

/// Display rows of the section at `index`, in field order.
///
/// Fields whose value has no description are left out.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[must_use]
pub fn populate_fields(sections: &[FormattedSection], index: usize) -> Vec<FieldRow> {
    sections[index]
        .fields
        .iter()
        .filter_map(|(label, value)| {
            format_value(value).map(|text| FieldRow {
                label: label.clone(),
                text,
            })
        })
        .collect()
}

fn section_size(section: &FormattedSection, metrics: &LayoutMetrics, viewport_width: f64) -> Size {
    // Location sections are a square map.
    let height = if section.is_location() {
        viewport_width
    } else {
        metrics.section_height(section.len())
    };
    Size::new(viewport_width, height)
}

/// The sections bound to one detail screen.
///
/// Rebinding replaces the whole list; nothing from a previous binding
/// survives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    sections: Vec<FormattedSection>,
    metrics: LayoutMetrics,
}

impl SectionLayout {
    /// Creates an empty layout with the given metrics.
    #[must_use]
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self {
            sections: Vec::new(),
            metrics,
        }
    }

    /// Creates a layout with default metrics bound to `sections`.
    #[must_use]
    pub fn with_sections(sections: Vec<FormattedSection>) -> Self {
        let mut layout = Self::default();
        layout.bind(sections);
        layout
    }

    /// Replaces the bound sections.
    pub fn bind(&mut self, sections: Vec<FormattedSection>) {
        debug!(
            previous = self.sections.len(),
            bound = sections.len(),
            "binding sections"
        );
        self.sections = sections;
    }

    /// Drops all bound sections.
    pub fn clear(&mut self) {
        self.bind(Vec::new());
    }

    #[must_use]
    pub fn sections(&self) -> &[FormattedSection] {
        &self.sections
    }

    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        section_count(&self.sections)
    }

    #[must_use]
    pub fn item_count(&self, index: usize) -> usize {
        item_count(&self.sections, index)
    }

    #[must_use]
    pub fn is_location_section(&self, index: usize) -> bool {
        is_location_section(&self.sections, index)
    }

    /// Size of the section at `index`, using this layout's metrics.
    #[must_use]
    pub fn size_for_section(&self, index: usize, viewport_width: f64) -> Size {
        section_size(&self.sections[index], &self.metrics, viewport_width)
    }

    #[must_use]
    pub fn header_title(&self, index: usize) -> &str {
        header_title(&self.sections, index)
    }

    #[must_use]
    pub fn populate_fields(&self, index: usize) -> Vec<FieldRow> {
        populate_fields(&self.sections, index)
    }

    /// Total height of all sections stacked, headers excluded.
    #[must_use]
    pub fn content_height(&self, viewport_width: f64) -> f64 {
        (0..self.section_count())
            .map(|i| self.size_for_section(i, viewport_width).height)
            .sum()
    }

    /// Applies the section at `index` to a rendering surface.
    ///
    /// The location section gets `map` when there is one and no rows either
    /// way.
    pub fn render<R: SectionRenderer + ?Sized>(
        &self,
        index: usize,
        viewport_width: f64,
        map: Option<&MapRegion>,
        renderer: &mut R,
    ) {
        renderer.header(self.header_title(index));
        renderer.size(self.size_for_section(index, viewport_width));
        if self.is_location_section(index) {
            if let Some(region) = map {
                renderer.map(region);
            }
        } else {
            renderer.fields(&self.populate_fields(index));
        }
    }
}
