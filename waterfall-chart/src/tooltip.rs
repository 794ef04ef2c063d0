//! Tooltip content rendering for the hovered category-axis index.

use std::fmt::Write;
use std::sync::Arc;

use waterfall_format::NumberFormatter;

use crate::config::WaterfallMode;
use crate::constants::ASSIST_SERIES;
use crate::series::SeriesPoint;

/// One candidate series entry at the hovered axis index, as handed over
/// by the renderer's tooltip callback.
#[derive(Debug, Clone)]
pub struct TooltipEntry {
    pub series_name: String,
    pub category_label: String,
    pub point: SeriesPoint,
}

/// Renders the tooltip body for the hovered axis index.
#[derive(Debug, Clone)]
pub struct TooltipRenderer {
    mode: WaterfallMode,
    total_label: String,
    has_breakdown: bool,
    number: Arc<dyn NumberFormatter>,
}

impl TooltipRenderer {
    pub fn new(
        mode: WaterfallMode,
        total_label: impl Into<String>,
        has_breakdown: bool,
        number: Arc<dyn NumberFormatter>,
    ) -> Self {
        Self {
            mode,
            total_label: total_label.into(),
            has_breakdown,
            number,
        }
    }

    /// Render the tooltip for the candidate entries of one axis index.
    /// Returns an empty string when no hoverable entry exists.
    pub fn render(&self, entries: &[TooltipEntry]) -> String {
        let Some(entry) = entries
            .iter()
            .find(|e| e.series_name != ASSIST_SERIES && !e.point.value.is_token())
        else {
            return String::new();
        };

        let is_total = entry.series_name == self.total_label;
        let mut rows: Vec<(String, String)> = Vec::new();

        match (self.mode, is_total) {
            (WaterfallMode::NonCumulative, false) => {
                let start = entry.point.start.unwrap_or(0.0);
                let end = entry.point.end.unwrap_or(0.0);
                let change = entry.point.original_value.unwrap_or(0.0);
                rows.push(("Start".to_string(), self.number.format(start)));
                rows.push(("End".to_string(), self.number.format(end)));
                if start != 0.0 {
                    // Percent change is only meaningful from a nonzero
                    // starting point.
                    rows.push((
                        "Change (%)".to_string(),
                        format!("{:.2}%", change / start * 100.0),
                    ));
                } else {
                    rows.push(("Change".to_string(), self.number.format(change)));
                }
            }
            (WaterfallMode::Cumulative, false) => {
                rows.push((
                    entry.series_name.clone(),
                    self.number
                        .format(entry.point.original_value.unwrap_or(0.0)),
                ));
                rows.push((
                    self.total_label.clone(),
                    self.number.format(entry.point.total_sum.unwrap_or(0.0)),
                ));
            }
            (_, true) => {
                rows.push((
                    self.total_label.clone(),
                    self.number.format(entry.point.value.unwrap_or_zero()),
                ));
            }
        }

        // A total bar without a breakdown dimension repeats the total
        // label, so the title adds nothing there.
        let title = if is_total && !self.has_breakdown {
            None
        } else {
            Some(entry.category_label.as_str())
        };
        tooltip_html(title, &rows)
    }
}

/// Minimal tooltip markup: an optional bold title line followed by
/// key/value rows.
pub fn tooltip_html(title: Option<&str>, rows: &[(String, String)]) -> String {
    let mut html = String::new();
    if let Some(title) = title {
        let _ = writeln!(html, "<div><b>{title}</b></div>");
    }
    for (key, value) in rows {
        let _ = writeln!(html, "<div>{key}: {value}</div>");
    }
    html
}
