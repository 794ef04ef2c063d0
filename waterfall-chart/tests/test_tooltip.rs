//! Tooltip rendering tests.

use std::sync::Arc;

use waterfall_chart::config::WaterfallMode;
use waterfall_chart::series::SeriesPoint;
use waterfall_chart::tooltip::{TooltipEntry, TooltipRenderer};
use waterfall_format::D3NumberFormatter;

fn renderer(mode: WaterfallMode, has_breakdown: bool) -> TooltipRenderer {
    TooltipRenderer::new(
        mode,
        "Total",
        has_breakdown,
        Arc::new(D3NumberFormatter::default()),
    )
}

fn entry(series_name: &str, category: &str, point: SeriesPoint) -> TooltipEntry {
    TooltipEntry {
        series_name: series_name.to_string(),
        category_label: category.to_string(),
        point,
    }
}

#[test]
fn test_percent_change_from_nonzero_start() {
    let renderer = renderer(WaterfallMode::NonCumulative, false);
    let html = renderer.render(&[entry(
        "Increase",
        "A",
        SeriesPoint::number(20.0).original_value(20.0).span(100.0, 120.0),
    )]);

    assert!(html.contains("<b>A</b>"));
    assert!(html.contains("Start: 100"));
    assert!(html.contains("End: 120"));
    assert!(html.contains("Change (%): 20.00%"));
}

#[test]
fn test_change_fallback_when_start_is_zero() {
    let renderer = renderer(WaterfallMode::NonCumulative, false);
    let html = renderer.render(&[entry(
        "Increase",
        "A",
        SeriesPoint::number(50.0).original_value(50.0).span(0.0, 50.0),
    )]);

    // Division by zero is guarded: no percent row, absolute change
    // instead.
    assert!(!html.contains("Change (%)"));
    assert!(html.contains("Change: 50"));
}

#[test]
fn test_cumulative_rows_pair_delta_and_running_total() {
    let renderer = renderer(WaterfallMode::Cumulative, false);
    let html = renderer.render(&[entry(
        "Decrease",
        "Q2",
        SeriesPoint::number(5.0).original_value(-5.0).total_sum(5.0),
    )]);

    assert!(html.contains("<b>Q2</b>"));
    assert!(html.contains("Decrease: -5"));
    assert!(html.contains("Total: 5"));
}

#[test]
fn test_assist_and_token_entries_are_skipped() {
    let renderer = renderer(WaterfallMode::Cumulative, false);
    let html = renderer.render(&[
        entry("assist", "Q1", SeriesPoint::number(10.0)),
        entry("Increase", "Q1", SeriesPoint::token()),
        entry(
            "Decrease",
            "Q1",
            SeriesPoint::number(3.0).original_value(-3.0).total_sum(7.0),
        ),
    ]);

    assert!(!html.contains("assist"));
    assert!(html.contains("Decrease: -3"));
}

#[test]
fn test_empty_when_no_hoverable_entry() {
    let renderer = renderer(WaterfallMode::Cumulative, false);
    let html = renderer.render(&[
        entry("assist", "Q1", SeriesPoint::number(10.0)),
        entry("Increase", "Q1", SeriesPoint::token()),
    ]);
    assert_eq!(html, "");

    assert_eq!(renderer.render(&[]), "");
}

#[test]
fn test_total_without_breakdown_has_no_title() {
    let renderer = renderer(WaterfallMode::Cumulative, false);
    let html = renderer.render(&[entry(
        "Total",
        "Total",
        SeriesPoint::number(25.0).total_sum(25.0),
    )]);

    assert!(!html.contains("<b>"));
    assert!(html.contains("Total: 25"));
}

#[test]
fn test_total_with_breakdown_keeps_title() {
    let renderer = renderer(WaterfallMode::Cumulative, true);
    let html = renderer.render(&[entry(
        "Total",
        "Q1",
        SeriesPoint::number(10.0).total_sum(10.0),
    )]);

    assert!(html.contains("<b>Q1</b>"));
    assert!(html.contains("Total: 10"));
}

#[test]
fn test_non_cumulative_total_entry_shows_end_value() {
    let renderer = renderer(WaterfallMode::NonCumulative, false);
    let html = renderer.render(&[entry(
        "Total",
        "Total",
        SeriesPoint::number(50.0).span(0.0, 50.0),
    )]);

    assert!(html.contains("Total: 50"));
    assert!(!html.contains("Start"));
}
