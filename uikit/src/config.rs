//! Kit-wide configuration.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_PLACEHOLDER: &str = "…";
pub const DEFAULT_SLIDER_FILL: &str = "#2d7dff";
pub const DEFAULT_SLIDER_TRACK: &str = "#3b4252";

/// Settings shared by every widget installed on a page.
///
/// Values are copied into the document when a widget instance is
/// initialised, so later API calls do not need the config at hand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// How long a `[data-ui-btn-loading]` button stays busy after a click.
    pub loading_demo_ms: u64,

    /// Text shown in a progress bar's value slot while indeterminate.
    pub indeterminate_placeholder: String,

    /// Slider fill colour (left of the thumb).
    pub slider_fill: String,

    /// Slider track colour (right of the thumb).
    pub slider_track: String,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            loading_demo_ms: 1200,
            indeterminate_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            slider_fill: DEFAULT_SLIDER_FILL.to_string(),
            slider_track: DEFAULT_SLIDER_TRACK.to_string(),
        }
    }
}

impl KitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading_demo(&self) -> Duration {
        Duration::from_millis(self.loading_demo_ms)
    }

    /// Set the auto-loading duration of demo buttons.
    pub fn with_loading_demo(mut self, duration: Duration) -> Self {
        self.loading_demo_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the indeterminate progress placeholder.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.indeterminate_placeholder = text.into();
        self
    }

    /// Set the slider fill and track colours.
    pub fn with_slider_colors(mut self, fill: impl Into<String>, track: impl Into<String>) -> Self {
        self.slider_fill = fill.into();
        self.slider_track = track.into();
        self
    }
}
