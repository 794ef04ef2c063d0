use thiserror::Error;

/// Configuration-level misuse of the transform.
///
/// Malformed row data never produces an error; missing numeric cells
/// default to zero and missing labels fall back to a placeholder.
#[derive(Error, Debug, PartialEq)]
pub enum WaterfallChartError {
    #[error("No category column configured: set `xAxis` or `granularitySqla`")]
    MissingCategoryColumn,

    #[error("Cumulative mode requires a `metric` column")]
    MissingMetricColumn,
}
