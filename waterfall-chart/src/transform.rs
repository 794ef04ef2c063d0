//! Top-level transform: query-result rows + configuration → chart
//! options for the bar-chart renderer.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;
use waterfall_format::{
    CurrencyFormatter, D3NumberFormatter, Formatters, NumberFormatter, TimeFormatter,
    UtcTimeFormatter,
};

use crate::config::{WaterfallConfig, WaterfallMode};
use crate::constants::{ASSIST_SERIES, WATERFALL_STACK};
use crate::data::{classify_category, CategoryValue, Row};
use crate::error::WaterfallChartError;
use crate::group::group_rows;
use crate::label::LabelFormatter;
use crate::options::{
    AxisLabel, AxisType, BarSeries, CategoryAxis, ChartOptions, Grid, LabelPosition,
    LegendConfig, SeriesLabel, SeriesType, TooltipConfig, TooltipTrigger, ValueAxis,
};
use crate::series::{
    build_cumulative_series, build_non_cumulative_series, SeriesPoint, SeriesStyle,
    WaterfallSeries,
};
use crate::tooltip::TooltipRenderer;

/// Everything the host needs to render the chart: serializable options
/// plus the label and tooltip callbacks.
#[derive(Debug, Clone)]
pub struct WaterfallChartProps {
    pub options: ChartOptions,
    pub label: LabelFormatter,
    pub tooltip: TooltipRenderer,
}

/// Build the formatting collaborators the config asks for. A currency
/// directive takes precedence over the plain y-axis number format.
pub fn formatters_from_config(config: &WaterfallConfig) -> Formatters {
    let number: Arc<dyn NumberFormatter> = match &config.currency_format {
        Some(currency) => Arc::new(CurrencyFormatter::new(
            currency.clone(),
            config.y_axis_format.clone(),
        )),
        None => Arc::new(D3NumberFormatter::new(config.y_axis_format.clone())),
    };
    let time: Arc<dyn TimeFormatter> = match &config.x_axis_time_format {
        Some(format_str) => Arc::new(UtcTimeFormatter::new(format_str.clone())),
        None => Arc::new(UtcTimeFormatter::default()),
    };
    Formatters { number, time }
}

/// Run the waterfall transform. Pure over its inputs: re-invocation
/// with the same rows and config produces identical output.
pub fn build_waterfall_chart(
    rows: &[Row],
    config: &WaterfallConfig,
    formatters: &Formatters,
) -> Result<WaterfallChartProps, WaterfallChartError> {
    let category = config.category_column()?;
    let breakdown = config.breakdown_column();
    let mode = config.mode();

    debug!(
        rows = rows.len(),
        category,
        ?breakdown,
        ?mode,
        "building waterfall chart options"
    );

    let style = SeriesStyle {
        increase_color: config.increase_color,
        decrease_color: config.decrease_color,
        increase_visible: config.series_visible(&config.increase_label),
        decrease_visible: config.series_visible(&config.decrease_label),
    };

    let (display_rows, series) = match mode {
        WaterfallMode::Cumulative => {
            let metric = config
                .metric
                .as_deref()
                .ok_or(WaterfallChartError::MissingMetricColumn)?;
            let grouped = group_rows(
                rows,
                category,
                breakdown,
                metric,
                &config.total_label,
                config.show_total,
            );
            let series = build_cumulative_series(
                &grouped,
                category,
                breakdown,
                metric,
                &config.total_label,
                &style,
            );
            (grouped, series)
        }
        WaterfallMode::NonCumulative => {
            // Start/end columns are guaranteed by the mode resolution.
            let metric_start = config.metric_start.as_deref().unwrap_or_default();
            let metric_end = config.metric_end.as_deref().unwrap_or_default();
            let series = build_non_cumulative_series(
                rows,
                category,
                breakdown,
                metric_start,
                metric_end,
                &config.total_label,
            );
            (rows.to_vec(), series)
        }
    };

    let x_axis_data = category_axis_data(&display_rows, category, breakdown, config, formatters);
    let options = assemble_options(x_axis_data, series, config);

    let label = LabelFormatter::new(mode, formatters.number.clone());
    let tooltip = TooltipRenderer::new(
        mode,
        config.total_label.clone(),
        breakdown.is_some(),
        formatters.number.clone(),
    );

    Ok(WaterfallChartProps {
        options,
        label,
        tooltip,
    })
}

/// Category-axis labels, one per row. Breakdown values take precedence
/// over the category column; temporal values go through the time
/// formatter.
fn category_axis_data(
    rows: &[Row],
    category: &str,
    breakdown: Option<&str>,
    config: &WaterfallConfig,
    formatters: &Formatters,
) -> Vec<String> {
    let label_column = breakdown.unwrap_or(category);
    let temporal = breakdown.is_none() && config.category_is_temporal();
    rows.iter()
        .map(
            |row| match classify_category(row.get(label_column), temporal) {
                CategoryValue::Temporal(epoch_ms) => formatters.time.format(epoch_ms),
                CategoryValue::Text(text) => text,
            },
        )
        .collect()
}

fn assemble_options(
    x_axis_data: Vec<String>,
    series: WaterfallSeries,
    config: &WaterfallConfig,
) -> ChartOptions {
    let legend_names = [
        config.increase_label.clone(),
        config.decrease_label.clone(),
        config.total_label.clone(),
    ];
    let selected: IndexMap<String, bool> = legend_names
        .iter()
        .map(|name| (name.clone(), config.series_visible(name)))
        .collect();

    let bar_series = |name: &str,
                      color: Option<String>,
                      data: Vec<SeriesPoint>,
                      show_label: bool,
                      position: LabelPosition| BarSeries {
        name: name.to_string(),
        series_type: SeriesType::Bar,
        stack: WATERFALL_STACK.to_string(),
        color,
        data,
        label: SeriesLabel {
            show: show_label,
            position,
        },
    };

    ChartOptions {
        grid: Grid::default(),
        x_axis: CategoryAxis {
            axis_type: AxisType::Category,
            data: x_axis_data,
            name: config.x_axis_label.clone(),
            axis_label: AxisLabel {
                rotate: config.x_ticks_layout.label_rotation(),
            },
        },
        y_axis: ValueAxis {
            axis_type: AxisType::Value,
            name: config.y_axis_label.clone(),
        },
        legend: LegendConfig {
            show: config.show_legend,
            data: legend_names.to_vec(),
            selected,
        },
        tooltip: TooltipConfig {
            show: true,
            trigger: TooltipTrigger::Axis,
        },
        // The assist series must come first so the renderer stacks the
        // visible bars on top of it.
        series: vec![
            bar_series(ASSIST_SERIES, None, series.assist, false, LabelPosition::Top),
            bar_series(
                &config.increase_label,
                Some(config.increase_color.css()),
                series.increase,
                config.show_value,
                LabelPosition::Top,
            ),
            bar_series(
                &config.decrease_label,
                Some(config.decrease_color.css()),
                series.decrease,
                config.show_value,
                LabelPosition::Bottom,
            ),
            bar_series(
                &config.total_label,
                Some(config.total_color.css()),
                series.total,
                config.show_value,
                LabelPosition::Top,
            ),
        ],
    }
}
