use std::fmt::Debug;
use std::sync::Arc;

use chrono::DateTime;
use format_num::NumberFormat;

/// Formats a numeric value for axis labels, bar labels, and tooltips.
pub trait NumberFormatter: Debug + Send + Sync + 'static {
    fn format(&self, value: f64) -> String;
}

/// Formats an epoch-milliseconds timestamp for the category axis.
pub trait TimeFormatter: Debug + Send + Sync + 'static {
    fn format(&self, epoch_ms: f64) -> String;
}

/// Number formatter driven by a d3-style pattern (e.g. `",.2f"`, `".3s"`).
///
/// Without a pattern (or with a pattern this engine does not understand,
/// like the host's adaptive `SMART_NUMBER` directive) values render with
/// their natural display form.
#[derive(Debug, Clone, Default)]
pub struct D3NumberFormatter {
    pub format_str: Option<String>,
}

impl D3NumberFormatter {
    pub fn new(format_str: Option<String>) -> Self {
        // The adaptive directive is resolved by the host, not by the
        // d3 pattern engine.
        let format_str = format_str.filter(|s| !s.is_empty() && s != "SMART_NUMBER");
        Self { format_str }
    }
}

impl NumberFormatter for D3NumberFormatter {
    fn format(&self, value: f64) -> String {
        if let Some(format_str) = &self.format_str {
            let formatter = NumberFormat::new();
            formatter.format(format_str, value)
        } else {
            value.to_string()
        }
    }
}

/// Time formatter applying a chrono format string to UTC timestamps.
#[derive(Debug, Clone)]
pub struct UtcTimeFormatter {
    pub format_str: String,
}

impl Default for UtcTimeFormatter {
    fn default() -> Self {
        Self {
            format_str: "%Y-%m-%d".to_string(),
        }
    }
}

impl UtcTimeFormatter {
    pub fn new(format_str: impl Into<String>) -> Self {
        Self {
            format_str: format_str.into(),
        }
    }
}

impl TimeFormatter for UtcTimeFormatter {
    fn format(&self, epoch_ms: f64) -> String {
        match DateTime::from_timestamp_millis(epoch_ms as i64) {
            Some(ts) => ts.format(&self.format_str).to_string(),
            // Out-of-range timestamps fall back to the raw number
            None => epoch_ms.to_string(),
        }
    }
}

/// Bundle of the formatting collaborators a chart transform needs.
#[derive(Debug, Clone)]
pub struct Formatters {
    pub number: Arc<dyn NumberFormatter>,
    pub time: Arc<dyn TimeFormatter>,
}

impl Default for Formatters {
    fn default() -> Self {
        Self {
            number: Arc::new(D3NumberFormatter::default()),
            time: Arc::new(UtcTimeFormatter::default()),
        }
    }
}
