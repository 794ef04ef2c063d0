use indexmap::IndexMap;
use waterfall_common::value::DataValue;

use crate::constants::NULL_LABEL;

/// One row of the input result table: column name → cell value, in the
/// column order the query produced.
pub type Row = IndexMap<String, DataValue>;

/// Numeric cell lookup. Missing or non-numeric cells default to zero.
pub fn metric_value(row: &Row, column: &str) -> f64 {
    row.get(column).and_then(DataValue::as_f64).unwrap_or(0.0)
}

/// Label cell lookup. Missing or null cells take the null placeholder;
/// numeric cells are coerced to their display form.
pub fn label_value(row: &Row, column: &str) -> String {
    row.get(column)
        .map(|v| v.to_label(NULL_LABEL))
        .unwrap_or_else(|| NULL_LABEL.to_string())
}

/// A row is a total marker when its category or breakdown cell holds
/// the reserved total label.
pub fn is_total_row(
    row: &Row,
    category: &str,
    breakdown: Option<&str>,
    total_label: &str,
) -> bool {
    let cell_is_total = |column: &str| {
        row.get(column)
            .map(|v| v.eq_str(total_label))
            .unwrap_or(false)
    };
    cell_is_total(category) || breakdown.map(cell_is_total).unwrap_or(false)
}

/// A category-axis entry, classified so temporal values can be run
/// through the time formatter while everything else renders as text.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryValue {
    Text(String),
    Temporal(f64),
}

/// Classify a category cell. Numeric cells of a temporal column are
/// epoch-milliseconds timestamps; everything else coerces to text.
pub fn classify_category(value: Option<&DataValue>, temporal_column: bool) -> CategoryValue {
    match value {
        Some(DataValue::Number(v)) if temporal_column => CategoryValue::Temporal(*v),
        Some(v) => CategoryValue::Text(v.to_label(NULL_LABEL)),
        None => CategoryValue::Text(NULL_LABEL.to_string()),
    }
}
