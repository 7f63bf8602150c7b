use crate::error::ViewerResult;
use ambrosus_layout::LayoutMetrics;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the sample codes live.
pub const DEFAULT_SAMPLES_URL: &str = "https://github.com/ambrosus/sdk-ios";

/// Configuration for the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Link shown in the instructions.
    pub samples_url: String,
    /// Screen width used for section sizing, in points.
    pub viewport_width: f64,
    /// Show the instructions the first time the scanner appears.
    pub show_instructions_on_first_launch: bool,
    /// Capacity of the scan command and UI event channels.
    pub channel_capacity: usize,
    /// Section cell dimensions.
    pub layout: LayoutMetrics,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            samples_url: DEFAULT_SAMPLES_URL.to_string(),
            viewport_width: 375.0,
            show_instructions_on_first_launch: true,
            channel_capacity: 32,
            layout: LayoutMetrics::default(),
        }
    }
}

impl ViewerConfig {
    /// Parses a configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> ViewerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> ViewerResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
