//! Shared cell handling for the importers.
//!
//! Both importers collect raw cell text row by row, then hand it to
//! [`build_table`], which applies the missing-value rules and infers one
//! type per column.

use thiserror::Error;
use tracing::debug;

use crate::config::LoadConfig;
use crate::table::{Column, Table, TableError};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse delimited text: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to open workbook: {0}")]
    Workbook(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Missing header row")]
    EmptyHeader,

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Turn raw rows into a typed table.
///
/// A column is `Float` when every non-missing cell parses as a number,
/// including a column with no values at all. Otherwise it is `Text`.
/// NaN in any spelling is stored as missing.
pub fn build_table(
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    config: &LoadConfig,
) -> Result<Table, LoadError> {
    if headers.is_empty() {
        return Err(LoadError::EmptyHeader);
    }

    let mut columns = Vec::with_capacity(headers.len());
    for (col_idx, name) in headers.into_iter().enumerate() {
        let cells: Vec<Option<String>> = rows
            .iter()
            .map(|row| {
                row.get(col_idx)
                    .cloned()
                    .flatten()
                    .filter(|raw| !config.is_missing(raw))
                    .map(|raw| raw.trim().to_string())
            })
            .collect();

        let column = infer_column(cells);
        debug!("Column '{}' inferred as {}", name, column.type_name());
        columns.push((name.trim().to_string(), column));
    }

    Ok(Table::from_columns(columns)?)
}

fn infer_column(cells: Vec<Option<String>>) -> Column {
    let parsed: Option<Vec<Option<f64>>> = cells
        .iter()
        .map(|cell| match cell {
            Some(text) => text
                .parse::<f64>()
                .ok()
                .map(|v| (!v.is_nan()).then_some(v)),
            None => Some(None),
        })
        .collect();

    match parsed {
        Some(values) => Column::Float(values),
        None => Column::Text(cells),
    }
}
