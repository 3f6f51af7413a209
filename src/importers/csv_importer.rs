use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::LoadConfig;
use crate::importers::cells::{build_table, LoadError};
use crate::table::Table;

/// Loader for delimited observation files with a header row
pub struct CsvImporter {
    path: PathBuf,
    config: LoadConfig,
}

impl CsvImporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: LoadConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into a table
    pub fn load(&self) -> Result<Table, LoadError> {
        info!("Loading observations from {}", self.path.display());

        let file = File::open(&self.path)?;
        let table = Self::read_from(file, &self.config)?;

        info!(
            "Loaded {} rows x {} columns from {}",
            table.row_count(),
            table.column_count(),
            self.path.display()
        );
        Ok(table)
    }

    /// Parse delimited text from any reader.
    ///
    /// Rows with a different field count than the header are rejected.
    pub fn read_from<R: Read>(reader: R, config: &LoadConfig) -> Result<Table, LoadError> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(true)
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();
        debug!("Header columns: {:?}", headers);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|field| Some(field.to_string())).collect());
        }

        build_table(headers, rows, config)
    }
}
