//! The four parallel waterfall series and the accumulation loops that
//! fill them.

use serde::Serialize;
use waterfall_common::color::{RgbColor, TRANSPARENT};
use waterfall_common::value::SeriesValue;

use crate::assist::{assist_decision, opposite_signs, AssistDecision, AssistPaint};
use crate::data::{is_total_row, metric_value, Row};

/// Per-point style override, serialized for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    pub color: String,
}

/// One bar of one series. Points besides `value` carry the numbers the
/// label and tooltip formatters need downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub value: SeriesValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
}

impl SeriesPoint {
    /// Placeholder point: no bar rendered at this index.
    pub fn token() -> Self {
        Self {
            value: SeriesValue::Token,
            original_value: None,
            total_sum: None,
            start: None,
            end: None,
            item_style: None,
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            value: SeriesValue::Number(value),
            ..Self::token()
        }
    }

    pub fn original_value(mut self, value: f64) -> Self {
        self.original_value = Some(value);
        self
    }

    pub fn total_sum(mut self, value: f64) -> Self {
        self.total_sum = Some(value);
        self
    }

    pub fn span(mut self, start: f64, end: f64) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.item_style = Some(ItemStyle {
            color: color.into(),
        });
        self
    }
}

/// The four index-aligned series of a waterfall chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaterfallSeries {
    pub assist: Vec<SeriesPoint>,
    pub increase: Vec<SeriesPoint>,
    pub decrease: Vec<SeriesPoint>,
    pub total: Vec<SeriesPoint>,
}

impl WaterfallSeries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            assist: Vec::with_capacity(capacity),
            increase: Vec::with_capacity(capacity),
            decrease: Vec::with_capacity(capacity),
            total: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.assist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assist.is_empty()
    }
}

/// Colors and legend visibility needed to paint assist bars.
#[derive(Debug, Clone)]
pub struct SeriesStyle {
    pub increase_color: RgbColor,
    pub decrease_color: RgbColor,
    pub increase_visible: bool,
    pub decrease_visible: bool,
}

/// Cumulative accumulation over grouped rows.
///
/// Threads `previous_total` sequentially through the row sequence:
/// each non-total row contributes its metric to the running total and
/// emits into the increase or decrease series; total-marker rows emit
/// the running total itself into the total series.
pub fn build_cumulative_series(
    rows: &[Row],
    category: &str,
    breakdown: Option<&str>,
    metric: &str,
    total_label: &str,
    style: &SeriesStyle,
) -> WaterfallSeries {
    let mut series = WaterfallSeries::with_capacity(rows.len());
    let mut previous_total = 0.0_f64;

    for (index, row) in rows.iter().enumerate() {
        let is_total = is_total_row(row, category, breakdown, total_label);
        let metric_v = metric_value(row, metric);

        // Total markers carry a pre-summed metric, so they do not add
        // to the running total, except when the sequence opens with
        // one.
        let total_sum = if is_total && index != 0 {
            previous_total
        } else {
            previous_total + metric_v
        };

        match assist_decision(previous_total, total_sum, is_total, index) {
            AssistDecision::Token => series.assist.push(SeriesPoint::token()),
            AssistDecision::Baseline { value, paint } => {
                let color = match paint {
                    AssistPaint::Transparent => TRANSPARENT.to_string(),
                    AssistPaint::Colored => {
                        // The cue takes the color of the series this
                        // row emits into, hidden when that legend
                        // entry is toggled off.
                        if delta_of(metric_v, previous_total, total_sum) < 0.0 {
                            let opacity = if style.decrease_visible { 1.0 } else { 0.0 };
                            style.decrease_color.css_with_opacity(opacity)
                        } else {
                            let opacity = if style.increase_visible { 1.0 } else { 0.0 };
                            style.increase_color.css_with_opacity(opacity)
                        }
                    }
                };
                series.assist.push(SeriesPoint::number(value).color(color));
            }
        }

        if is_total {
            series.increase.push(SeriesPoint::token());
            series.decrease.push(SeriesPoint::token());
            series
                .total
                .push(SeriesPoint::number(total_sum).total_sum(total_sum));
        } else {
            let value = delta_of(metric_v, previous_total, total_sum);
            if value < 0.0 {
                // Stacked bars render downward deltas as positive
                // magnitudes unless the running total itself is below
                // zero.
                let emitted = if total_sum < 0.0 { value } else { -value };
                series.increase.push(SeriesPoint::token());
                series.decrease.push(
                    SeriesPoint::number(emitted)
                        .original_value(metric_v)
                        .total_sum(total_sum),
                );
            } else {
                let emitted = if total_sum < 0.0 { -value } else { value };
                series.increase.push(
                    SeriesPoint::number(emitted)
                        .original_value(metric_v)
                        .total_sum(total_sum),
                );
                series.decrease.push(SeriesPoint::token());
            }
            series.total.push(SeriesPoint::token());
        }

        previous_total = total_sum;
    }

    series
}

/// Per-row delta, clipped when the running total crosses zero so the
/// visible bar only spans the segment on the far side.
fn delta_of(metric_value: f64, previous_total: f64, total_sum: f64) -> f64 {
    if opposite_signs(previous_total, total_sum) {
        metric_value.signum() * (metric_value.abs() - previous_total.abs())
    } else {
        metric_value
    }
}

/// Non-cumulative per-row deltas: each bar independently spans its own
/// start→end range, with no running state.
pub fn build_non_cumulative_series(
    rows: &[Row],
    category: &str,
    breakdown: Option<&str>,
    metric_start: &str,
    metric_end: &str,
    total_label: &str,
) -> WaterfallSeries {
    let mut series = WaterfallSeries::with_capacity(rows.len());

    for row in rows {
        let start = metric_value(row, metric_start);
        let end = metric_value(row, metric_end);
        let delta = end - start;

        if is_total_row(row, category, breakdown, total_label) {
            // Standalone reference bar from zero to the end value.
            series.assist.push(SeriesPoint::token());
            series.increase.push(SeriesPoint::token());
            series.decrease.push(SeriesPoint::token());
            series.total.push(SeriesPoint::number(end).span(0.0, end));
            continue;
        }

        series
            .assist
            .push(SeriesPoint::number(start).color(TRANSPARENT));
        if delta >= 0.0 {
            series.increase.push(
                SeriesPoint::number(delta)
                    .original_value(delta)
                    .span(start, end),
            );
            series.decrease.push(SeriesPoint::token());
        } else {
            series.increase.push(SeriesPoint::token());
            series.decrease.push(
                SeriesPoint::number(-delta)
                    .original_value(delta)
                    .span(start, end),
            );
        }
        series.total.push(SeriesPoint::token());
    }

    series
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use waterfall_common::value::DataValue;

    use super::*;
    use crate::constants::{DEFAULT_DECREASE_COLOR, DEFAULT_INCREASE_COLOR};

    fn style() -> SeriesStyle {
        SeriesStyle {
            increase_color: DEFAULT_INCREASE_COLOR,
            decrease_color: DEFAULT_DECREASE_COLOR,
            increase_visible: true,
            decrease_visible: true,
        }
    }

    fn row(cat: &str, metric: f64) -> Row {
        [
            ("cat".to_string(), DataValue::from(cat)),
            ("m".to_string(), DataValue::Number(metric)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_decrease_kept_negative_when_total_below_zero() {
        let rows = vec![row("a", -4.0), row("b", -6.0)];
        let series = build_cumulative_series(&rows, "cat", None, "m", "Total", &style());

        // Running total stays negative, so downward bars keep their
        // sign instead of being negated for stacking.
        assert_eq!(series.decrease[0].value, SeriesValue::Number(-4.0));
        assert_eq!(series.decrease[0].total_sum, Some(-4.0));
        assert_eq!(series.decrease[1].value, SeriesValue::Number(-6.0));
        assert_eq!(series.decrease[1].total_sum, Some(-10.0));
        assert!(series.increase.iter().all(|p| p.value.is_token()));
    }

    #[test]
    fn test_zero_crossing_clips_bar_magnitude() {
        let rows = vec![row("a", 5.0), row("b", -8.0)];
        let series = build_cumulative_series(&rows, "cat", None, "m", "Total", &style());

        // 5 crossing to -3: the visible bar is clipped to the segment
        // below the axis while the tooltip keeps the raw delta.
        assert_approx_eq!(f64, series.decrease[1].value.unwrap_or_zero(), -3.0);
        assert_eq!(series.decrease[1].original_value, Some(-8.0));
        assert_approx_eq!(f64, series.decrease[1].total_sum.unwrap(), -3.0);
    }

    #[test]
    fn test_assist_hidden_when_legend_entry_toggled_off() {
        let mut style = style();
        style.increase_visible = false;
        let rows = vec![row("a", 5.0), row("b", 3.0)];
        let series = build_cumulative_series(&rows, "cat", None, "m", "Total", &style);

        // Second row grows the total, so its assist bar is painted in
        // the increase color, forced invisible here.
        let item_style = series.assist[1].item_style.as_ref().unwrap();
        assert_eq!(item_style.color, "rgba(90, 193, 137, 0)");
    }
}
