//! Non-cumulative (start→end span) transform tests.

use indexmap::IndexMap;
use waterfall_chart::data::Row;
use waterfall_chart::transform::{build_waterfall_chart, formatters_from_config};
use waterfall_chart::WaterfallConfig;
use waterfall_common::value::{DataValue, SeriesValue};

fn row(cat: &str, start: f64, end: f64) -> Row {
    let mut row = IndexMap::new();
    row.insert("cat".to_string(), DataValue::from(cat));
    row.insert("open".to_string(), DataValue::Number(start));
    row.insert("close".to_string(), DataValue::Number(end));
    row
}

fn config() -> WaterfallConfig {
    serde_json::from_str(
        r#"{
            "xAxis": "cat",
            "nonCumulative": true,
            "metricStart": "open",
            "metricEnd": "close"
        }"#,
    )
    .unwrap()
}

#[test]
fn test_downward_span() {
    let config = config();
    let formatters = formatters_from_config(&config);
    let props = build_waterfall_chart(&[row("A", 100.0, 80.0)], &config, &formatters).unwrap();

    let [assist, increase, decrease, total] = &props.options.series[..] else {
        panic!("expected four series");
    };

    // delta = 80 - 100 = -20: a decrease bar of magnitude 20 on top of
    // a transparent offset bar of height 100.
    assert_eq!(decrease.data[0].value, SeriesValue::Number(20.0));
    assert_eq!(decrease.data[0].original_value, Some(-20.0));
    assert_eq!(decrease.data[0].start, Some(100.0));
    assert_eq!(decrease.data[0].end, Some(80.0));

    assert_eq!(assist.data[0].value, SeriesValue::Number(100.0));
    assert_eq!(
        assist.data[0].item_style.as_ref().unwrap().color,
        "transparent"
    );
    assert!(increase.data[0].value.is_token());
    assert!(total.data[0].value.is_token());
}

#[test]
fn test_upward_span() {
    let config = config();
    let formatters = formatters_from_config(&config);
    let props = build_waterfall_chart(&[row("A", 50.0, 75.0)], &config, &formatters).unwrap();

    let increase = &props.options.series[1];
    assert_eq!(increase.data[0].value, SeriesValue::Number(25.0));
    assert_eq!(increase.data[0].original_value, Some(25.0));
}

#[test]
fn test_per_row_deltas_are_independent() {
    let config = config();
    let formatters = formatters_from_config(&config);
    let rows = vec![row("A", 100.0, 80.0), row("B", 10.0, 30.0), row("C", 0.0, -5.0)];
    let props = build_waterfall_chart(&rows, &config, &formatters).unwrap();

    let [_, increase, decrease, _] = &props.options.series[..] else {
        panic!("expected four series");
    };
    // No running state leaks between rows: each delta is end - start.
    assert_eq!(decrease.data[0].original_value, Some(-20.0));
    assert_eq!(increase.data[1].original_value, Some(20.0));
    assert_eq!(decrease.data[2].original_value, Some(-5.0));
}

#[test]
fn test_total_marker_rows_span_from_zero() {
    let config = config();
    let formatters = formatters_from_config(&config);
    let rows = vec![row("A", 100.0, 80.0), row("Total", 30.0, 50.0)];
    let props = build_waterfall_chart(&rows, &config, &formatters).unwrap();

    let [assist, increase, decrease, total] = &props.options.series[..] else {
        panic!("expected four series");
    };
    assert_eq!(total.data[1].value, SeriesValue::Number(50.0));
    assert_eq!(total.data[1].start, Some(0.0));
    assert_eq!(total.data[1].end, Some(50.0));
    assert!(assist.data[1].value.is_token());
    assert!(increase.data[1].value.is_token());
    assert!(decrease.data[1].value.is_token());
}

#[test]
fn test_missing_start_end_cells_default_to_zero() {
    let mut sparse = Row::new();
    sparse.insert("cat".to_string(), DataValue::from("A"));
    sparse.insert("close".to_string(), DataValue::Number(50.0));

    let config = config();
    let formatters = formatters_from_config(&config);
    let props = build_waterfall_chart(&[sparse], &config, &formatters).unwrap();

    let increase = &props.options.series[1];
    assert_eq!(increase.data[0].value, SeriesValue::Number(50.0));
    assert_eq!(increase.data[0].start, Some(0.0));
}

#[test]
fn test_series_stay_index_aligned() {
    let config = config();
    let formatters = formatters_from_config(&config);
    let rows = vec![row("A", 1.0, 2.0), row("Total", 0.0, 3.0), row("B", 3.0, 1.0)];
    let props = build_waterfall_chart(&rows, &config, &formatters).unwrap();

    assert_eq!(props.options.x_axis.data.len(), 3);
    for series in &props.options.series {
        assert_eq!(series.data.len(), 3);
    }
    let [_, increase, decrease, total] = &props.options.series[..] else {
        panic!("expected four series");
    };
    for i in 0..3 {
        let visible = [&increase.data[i], &decrease.data[i], &total.data[i]]
            .iter()
            .filter(|p| !p.value.is_token())
            .count();
        assert_eq!(visible, 1, "index {i}");
    }
}
