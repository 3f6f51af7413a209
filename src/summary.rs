use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::classify::{CATEGORY_COLUMN, SNOWFALL_COLUMN};
use crate::table::{Column, Table, TableError};

pub const TEMPERATURE_COLUMN: &str = "average_temperature";
pub const SITE_COLUMN: &str = "site";

/// Aggregates for one snowfall category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub snowfall_category: String,
    /// `None` when the group has no snowfall values
    pub avg_snowfall: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub site_count: usize,
}

/// Per-category summary, one row per observed category in label order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    rows: Vec<SummaryRow>,
}

impl Summary {
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.snowfall_category == category)
    }

    /// Flatten back into a table keyed by the `snowfall_category` column.
    ///
    /// `Column` has no integer variant, so `site_count` is written as whole
    /// numbers in a `Float` column.
    pub fn to_table(&self) -> Result<Table, TableError> {
        Table::from_columns(vec![
            (
                CATEGORY_COLUMN.to_string(),
                Column::Text(
                    self.rows
                        .iter()
                        .map(|r| Some(r.snowfall_category.clone()))
                        .collect(),
                ),
            ),
            (
                "avg_snowfall".to_string(),
                Column::Float(self.rows.iter().map(|r| r.avg_snowfall).collect()),
            ),
            (
                "avg_temperature".to_string(),
                Column::Float(self.rows.iter().map(|r| r.avg_temperature).collect()),
            ),
            (
                "site_count".to_string(),
                Column::Float(self.rows.iter().map(|r| Some(r.site_count as f64)).collect()),
            ),
        ])
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.rows)
    }
}

#[derive(Default)]
struct Accumulator {
    snowfall_sum: f64,
    snowfall_n: usize,
    temperature_sum: f64,
    temperature_n: usize,
    site_count: usize,
}

impl Accumulator {
    fn mean(sum: f64, n: usize) -> Option<f64> {
        (n > 0).then(|| sum / n as f64)
    }
}

/// Group rows by `snowfall_category` and compute mean snowfall, mean
/// temperature and the number of non-missing sites per group.
///
/// Rows without a category are left out. Missing values (and NaN) are
/// skipped by both means and the site count.
pub fn summarize_data(data: &Table) -> Result<Summary, TableError> {
    let categories = data.text_column(CATEGORY_COLUMN)?;
    let snowfall = data.float_column(SNOWFALL_COLUMN)?;
    let temperature = data.float_column(TEMPERATURE_COLUMN)?;
    let sites = data.require_column(SITE_COLUMN)?;

    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for (row, category) in categories.iter().enumerate() {
        let Some(category) = category.as_deref() else {
            continue;
        };
        let acc = groups.entry(category).or_default();

        if let Some(x) = snowfall[row].filter(|x| !x.is_nan()) {
            acc.snowfall_sum += x;
            acc.snowfall_n += 1;
        }
        if let Some(t) = temperature[row].filter(|t| !t.is_nan()) {
            acc.temperature_sum += t;
            acc.temperature_n += 1;
        }
        if !sites.is_null(row) {
            acc.site_count += 1;
        }
    }

    let rows: Vec<SummaryRow> = groups
        .into_iter()
        .map(|(category, acc)| {
            debug!(
                "Category {}: {} snowfall values, {} sites",
                category, acc.snowfall_n, acc.site_count
            );
            SummaryRow {
                snowfall_category: category.to_string(),
                avg_snowfall: Accumulator::mean(acc.snowfall_sum, acc.snowfall_n),
                avg_temperature: Accumulator::mean(acc.temperature_sum, acc.temperature_n),
                site_count: acc.site_count,
            }
        })
        .collect();

    info!(
        "Summarized {} rows into {} categories",
        data.row_count(),
        rows.len()
    );
    Ok(Summary { rows })
}
