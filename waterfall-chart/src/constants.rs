// Reserved names, default labels, and default styling for the waterfall
// transform.

use waterfall_common::color::RgbColor;

// Name of the invisible offset series stacked beneath the visible bars.
// Excluded from the legend and skipped by the tooltip.
pub const ASSIST_SERIES: &str = "assist";

// Stack id shared by all four series so the renderer stacks them.
pub const WATERFALL_STACK: &str = "waterfall";

// Default display names; overridable from the config.
pub const DEFAULT_TOTAL_LABEL: &str = "Total";
pub const DEFAULT_INCREASE_LABEL: &str = "Increase";
pub const DEFAULT_DECREASE_LABEL: &str = "Decrease";

// Placeholder label for null category values.
pub const NULL_LABEL: &str = "N/A";

// Default series colors, matching the host dashboard's color pickers.
pub const DEFAULT_INCREASE_COLOR: RgbColor = RgbColor::new(90, 193, 137);
pub const DEFAULT_DECREASE_COLOR: RgbColor = RgbColor::new(224, 67, 85);
pub const DEFAULT_TOTAL_COLOR: RgbColor = RgbColor::new(102, 102, 102);

// Grid margins around the plot area
pub const GRID_MARGIN_TOP: f32 = 30.0;
pub const GRID_MARGIN_BOTTOM: f32 = 30.0;
pub const GRID_MARGIN_LEFT: f32 = 20.0;
pub const GRID_MARGIN_RIGHT: f32 = 20.0;
