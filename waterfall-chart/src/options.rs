//! Serializable chart-options structures handed to the bar-chart
//! renderer.

use indexmap::IndexMap;
use serde::Serialize;

use crate::constants::{
    GRID_MARGIN_BOTTOM, GRID_MARGIN_LEFT, GRID_MARGIN_RIGHT, GRID_MARGIN_TOP,
};
use crate::series::SeriesPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub grid: Grid,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
    pub contain_label: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            top: GRID_MARGIN_TOP,
            bottom: GRID_MARGIN_BOTTOM,
            left: GRID_MARGIN_LEFT,
            right: GRID_MARGIN_RIGHT,
            contain_label: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub data: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub axis_label: AxisLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub rotate: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    pub show: bool,
    /// Display names of the legend entries, in render order. The
    /// assist series is deliberately absent.
    pub data: Vec<String>,
    pub selected: IndexMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub show: bool,
    pub trigger: TooltipTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Axis,
    Item,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub series_type: SeriesType,
    pub stack: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub data: Vec<SeriesPoint>,
    pub label: SeriesLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLabel {
    pub show: bool,
    pub position: LabelPosition,
}

/// Bar labels sit above upward bars and below downward ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Top,
    Bottom,
}
