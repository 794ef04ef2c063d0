//! Row grouping and total-row synthesis for cumulative mode.

use indexmap::IndexMap;
use waterfall_common::value::DataValue;

use crate::data::{label_value, metric_value, Row};

/// Group rows by category value, preserving first-seen category order,
/// and interleave synthetic total rows when requested.
///
/// With a breakdown column the rows of a group stay individual and each
/// group gains one synthetic row carrying the group's metric sum, with
/// the total label in the breakdown cell. Without a breakdown column
/// each group collapses to a single summed row, and one grand-total row
/// is appended at the end.
pub fn group_rows(
    rows: &[Row],
    category: &str,
    breakdown: Option<&str>,
    metric: &str,
    total_label: &str,
    append_total: bool,
) -> Vec<Row> {
    // First-seen order is the contract, so the accumulator is an
    // IndexMap keyed by the category's display label. The first raw
    // cell value is kept so synthetic rows preserve temporal typing.
    let groups: IndexMap<String, (DataValue, Vec<&Row>)> =
        rows.iter().fold(IndexMap::new(), |mut groups, row| {
            let key = label_value(row, category);
            let entry = groups.entry(key).or_insert_with(|| {
                let raw = row.get(category).cloned().unwrap_or(DataValue::Null);
                (raw, Vec::new())
            });
            entry.1.push(row);
            groups
        });

    match breakdown {
        Some(breakdown_col) => groups
            .into_values()
            .flat_map(|(raw_category, group)| {
                let group_sum: f64 = group.iter().map(|row| metric_value(row, metric)).sum();
                let mut flat: Vec<Row> = group.into_iter().cloned().collect();
                if append_total {
                    flat.push(synthetic_row(
                        category,
                        raw_category,
                        Some((breakdown_col, DataValue::from(total_label))),
                        metric,
                        group_sum,
                    ));
                }
                flat
            })
            .collect(),
        None => {
            let mut grand_total = 0.0;
            let mut flat: Vec<Row> = groups
                .into_values()
                .map(|(raw_category, group)| {
                    let group_sum: f64 =
                        group.iter().map(|row| metric_value(row, metric)).sum();
                    grand_total += group_sum;
                    synthetic_row(category, raw_category, None, metric, group_sum)
                })
                .collect();
            if append_total {
                flat.push(synthetic_row(
                    category,
                    DataValue::from(total_label),
                    None,
                    metric,
                    grand_total,
                ));
            }
            flat
        }
    }
}

fn synthetic_row(
    category: &str,
    category_value: DataValue,
    breakdown: Option<(&str, DataValue)>,
    metric: &str,
    metric_sum: f64,
) -> Row {
    let mut row = Row::new();
    row.insert(category.to_string(), category_value);
    if let Some((breakdown_col, breakdown_value)) = breakdown {
        row.insert(breakdown_col.to_string(), breakdown_value);
    }
    row.insert(metric.to_string(), DataValue::Number(metric_sum));
    row
}
