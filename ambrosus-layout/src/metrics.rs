use serde::{Deserialize, Serialize};

/// Fixed dimensions of a key/value section cell, in points.
///
/// A cell stacks one row per field. Each row is `row_height` tall and
/// followed by `item_spacing`; the stack is padded by `stack_padding`
/// (top and bottom together) and the cell by `bottom_padding`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub row_height: f64,
    pub item_spacing: f64,
    pub stack_padding: f64,
    pub bottom_padding: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            row_height: 36.0,
            item_spacing: 10.0,
            stack_padding: 30.0,
            bottom_padding: 20.0,
        }
    }
}

impl LayoutMetrics {
    /// Height of one field row including its spacing.
    #[must_use]
    pub fn per_row_height(&self) -> f64 {
        self.row_height + self.item_spacing
    }

    /// Height of a key/value section holding `field_count` rows.
    #[must_use]
    pub fn section_height(&self, field_count: usize) -> f64 {
        let content = self.per_row_height() * field_count as f64;
        content + self.stack_padding + self.bottom_padding
    }
}

/// Width and height of a laid-out section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
