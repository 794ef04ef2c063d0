pub mod assist;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod group;
pub mod label;
pub mod options;
pub mod series;
pub mod tooltip;
pub mod transform;

// Re-export the transform surface for external users
pub use crate::config::{WaterfallConfig, WaterfallMode, XTicksLayout};
pub use crate::error::WaterfallChartError;
pub use crate::transform::{build_waterfall_chart, formatters_from_config, WaterfallChartProps};
