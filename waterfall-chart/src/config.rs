use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::VariantNames;
use tracing::debug;
use waterfall_common::color::RgbColor;
use waterfall_format::CurrencyFormat;

use crate::constants::{
    DEFAULT_DECREASE_COLOR, DEFAULT_DECREASE_LABEL, DEFAULT_INCREASE_COLOR,
    DEFAULT_INCREASE_LABEL, DEFAULT_TOTAL_COLOR, DEFAULT_TOTAL_LABEL,
};
use crate::error::WaterfallChartError;

/// How bars accumulate along the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterfallMode {
    /// Bars are sequential deltas accumulating into a running total.
    Cumulative,
    /// Each bar independently spans its own start→end range.
    NonCumulative,
}

/// Category-axis tick label layout. Each layout maps to a fixed label
/// rotation; staggering itself is handled by the renderer.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, VariantNames,
)]
pub enum XTicksLayout {
    #[default]
    #[serde(rename = "auto")]
    #[strum(serialize = "auto")]
    Auto,
    #[serde(rename = "flat")]
    #[strum(serialize = "flat")]
    Flat,
    #[serde(rename = "45°")]
    #[strum(serialize = "45°")]
    Deg45,
    #[serde(rename = "90°")]
    #[strum(serialize = "90°")]
    Deg90,
    #[serde(rename = "staggered")]
    #[strum(serialize = "staggered")]
    Staggered,
}

impl XTicksLayout {
    pub fn label_rotation(&self) -> f32 {
        match self {
            XTicksLayout::Deg45 => 45.0,
            XTicksLayout::Deg90 => 90.0,
            XTicksLayout::Auto | XTicksLayout::Flat | XTicksLayout::Staggered => 0.0,
        }
    }
}

/// Waterfall chart configuration, fed from the host dashboard's form
/// data. Every field has a default so a minimal JSON object is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaterfallConfig {
    /// Category column. Preferred over `granularity_sqla` when both are
    /// set.
    pub x_axis: Option<String>,
    /// Temporal category column; values are interpreted as
    /// epoch-milliseconds timestamps.
    pub granularity_sqla: Option<String>,
    /// Breakdown columns. Only the first entry is used.
    pub groupby: Vec<String>,
    /// Metric column for cumulative mode.
    pub metric: Option<String>,
    /// Start/end metric columns for non-cumulative mode.
    pub metric_start: Option<String>,
    pub metric_end: Option<String>,
    pub non_cumulative: bool,
    pub show_total: bool,
    pub total_label: String,
    pub increase_label: String,
    pub decrease_label: String,
    pub increase_color: RgbColor,
    pub decrease_color: RgbColor,
    pub total_color: RgbColor,
    pub y_axis_format: Option<String>,
    pub currency_format: Option<CurrencyFormat>,
    pub x_axis_time_format: Option<String>,
    pub x_ticks_layout: XTicksLayout,
    pub show_legend: bool,
    pub show_value: bool,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    /// Legend selection state from the host: series display name →
    /// visible. Absent entries count as visible.
    pub legend_state: HashMap<String, bool>,
}

impl Default for WaterfallConfig {
    fn default() -> Self {
        Self {
            x_axis: None,
            granularity_sqla: None,
            groupby: Vec::new(),
            metric: None,
            metric_start: None,
            metric_end: None,
            non_cumulative: false,
            show_total: true,
            total_label: DEFAULT_TOTAL_LABEL.to_string(),
            increase_label: DEFAULT_INCREASE_LABEL.to_string(),
            decrease_label: DEFAULT_DECREASE_LABEL.to_string(),
            increase_color: DEFAULT_INCREASE_COLOR,
            decrease_color: DEFAULT_DECREASE_COLOR,
            total_color: DEFAULT_TOTAL_COLOR,
            y_axis_format: None,
            currency_format: None,
            x_axis_time_format: None,
            x_ticks_layout: XTicksLayout::default(),
            show_legend: true,
            show_value: false,
            x_axis_label: None,
            y_axis_label: None,
            legend_state: HashMap::new(),
        }
    }
}

impl WaterfallConfig {
    /// Column holding the category axis values.
    pub fn category_column(&self) -> Result<&str, WaterfallChartError> {
        self.x_axis
            .as_deref()
            .or(self.granularity_sqla.as_deref())
            .ok_or(WaterfallChartError::MissingCategoryColumn)
    }

    /// Optional breakdown column. Entries past the first are ignored.
    pub fn breakdown_column(&self) -> Option<&str> {
        if self.groupby.len() > 1 {
            debug!(
                extra = self.groupby.len() - 1,
                "waterfall breakdown uses only the first groupby column"
            );
        }
        self.groupby.first().map(String::as_str)
    }

    /// Whether the category values are epoch-milliseconds timestamps,
    /// which is the case when they come from the time-grain column.
    pub fn category_is_temporal(&self) -> bool {
        self.x_axis.is_none() && self.granularity_sqla.is_some()
    }

    /// Resolved accumulation mode. The non-cumulative toggle only takes
    /// effect when both start and end metric columns are configured;
    /// otherwise the transform silently falls back to cumulative mode.
    pub fn mode(&self) -> WaterfallMode {
        if self.non_cumulative {
            if self.metric_start.is_some() && self.metric_end.is_some() {
                return WaterfallMode::NonCumulative;
            }
            debug!(
                has_start = self.metric_start.is_some(),
                has_end = self.metric_end.is_some(),
                "non-cumulative toggle set without both start and end metrics, \
                 falling back to cumulative mode"
            );
        }
        WaterfallMode::Cumulative
    }

    /// Legend visibility for a series display name.
    pub fn series_visible(&self, name: &str) -> bool {
        self.legend_state.get(name).copied().unwrap_or(true)
    }
}
