use std::sync::Arc;

use waterfall_format::NumberFormatter;

use crate::config::WaterfallMode;
use crate::series::SeriesPoint;

/// Bar-top label formatter.
///
/// Cumulative bars are labeled with their per-row delta. Non-cumulative
/// bars show the end value, falling back through the point's other
/// numbers when it is absent.
#[derive(Debug, Clone)]
pub struct LabelFormatter {
    mode: WaterfallMode,
    number: Arc<dyn NumberFormatter>,
}

impl LabelFormatter {
    pub fn new(mode: WaterfallMode, number: Arc<dyn NumberFormatter>) -> Self {
        Self { mode, number }
    }

    pub fn format(&self, point: &SeriesPoint) -> String {
        let value = match self.mode {
            WaterfallMode::NonCumulative => point
                .end
                .or(point.total_sum)
                .or(point.original_value)
                .or(point.value.as_f64())
                .unwrap_or(0.0),
            WaterfallMode::Cumulative => point.original_value.unwrap_or(0.0),
        };
        self.number.format(value)
    }
}
