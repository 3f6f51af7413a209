use calamine::{open_workbook_auto, Data, Reader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::LoadConfig;
use crate::importers::cells::{build_table, LoadError};
use crate::table::Table;

/// Loader for observation tables kept in a spreadsheet workbook
/// (`.xlsx`, `.xls`, `.ods`).
///
/// # Expected Sheet Structure:
/// ```text
/// Row 1: Header (site | average_snowfall | average_temperature | ...)
/// Row 2..: One observation per row
/// ```
pub struct ExcelImporter {
    workbook_path: PathBuf,
    config: LoadConfig,
}

impl ExcelImporter {
    pub fn new(workbook_path: impl Into<PathBuf>) -> Self {
        Self {
            workbook_path: workbook_path.into(),
            config: LoadConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.workbook_path
    }

    /// Parse one worksheet into a table using the same missing-value and
    /// type rules as the delimited loader
    pub fn parse_sheet(&self, sheet_name: &str) -> Result<Table, LoadError> {
        info!(
            "Loading sheet {} from {}",
            sheet_name,
            self.workbook_path.display()
        );

        let mut workbook = match open_workbook_auto(&self.workbook_path) {
            Ok(wb) => wb,
            Err(e) => return Err(LoadError::Workbook(e.to_string())),
        };

        if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(LoadError::SheetNotFound(sheet_name.to_string()));
        }

        let range = match workbook.worksheet_range(sheet_name) {
            Ok(range) => range,
            Err(e) => return Err(LoadError::Workbook(e.to_string())),
        };

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row
                .iter()
                .enumerate()
                .map(|(idx, cell)| header_name(idx, cell))
                .collect(),
            None => return Err(LoadError::EmptyHeader),
        };
        debug!("Header columns: {:?}", headers);

        let body: Vec<Vec<Option<String>>> = rows
            .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
            .map(|row| row.iter().map(cell_text).collect())
            .collect();

        let table = build_table(headers, body, &self.config)?;
        info!(
            "Loaded {} rows from sheet {}",
            table.row_count(),
            sheet_name
        );
        Ok(table)
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Result<Vec<String>, LoadError> {
        let workbook = open_workbook_auto(&self.workbook_path)
            .map_err(|e| LoadError::Workbook(e.to_string()))?;
        Ok(workbook.sheet_names())
    }
}

fn header_name(idx: usize, cell: &Data) -> String {
    match cell_text(cell) {
        Some(name) if !name.trim().is_empty() => name,
        _ => format!("Unnamed: {idx}"),
    }
}

/// Raw text of a cell; formula errors and blanks are absent
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::String(s) => Some(s.clone()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        other => Some(other.to_string()),
    }
}
