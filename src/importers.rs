// ! Observation table importers for delimited text and spreadsheet workbooks

pub mod cells;
pub mod csv_importer;
pub mod excel_importer;

use std::path::Path;

// Re-export commonly used items
pub use cells::LoadError;
pub use csv_importer::CsvImporter;
pub use excel_importer::ExcelImporter;

use crate::table::Table;

/// Load a comma-separated observation file with `-999` read as missing.
pub fn load_data(filepath: impl AsRef<Path>) -> Result<Table, LoadError> {
    CsvImporter::new(filepath.as_ref()).load()
}
