use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Column {name} has type {actual}, expected {expected}")]
    ColumnType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Column {name} has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
}

/// A single typed column. `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Float(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Float(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_null(&self, row: usize) -> bool {
        match self {
            Column::Float(values) => matches!(values.get(row), Some(None)),
            Column::Text(values) => matches!(values.get(row), Some(None)),
        }
    }

    /// Number of cells holding a value.
    pub fn non_null_count(&self) -> usize {
        match self {
            Column::Float(values) => values.iter().filter(|v| v.is_some()).count(),
            Column::Text(values) => values.iter().filter(|v| v.is_some()).count(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Float(_) => "float",
            Column::Text(_) => "text",
        }
    }
}

/// In-memory columnar table with named columns in header order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, column)` pairs, keeping their order.
    pub fn from_columns(columns: Vec<(String, Column)>) -> Result<Self, TableError> {
        let mut table = Table::new();
        for (name, column) in columns {
            if table.position(&name).is_some() {
                return Err(TableError::DuplicateColumn(name));
            }
            table.with_column(name, column)?;
        }
        Ok(table)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|idx| &self.columns[idx])
    }

    /// Like [`Table::column`] but reports the missing name as an error.
    pub fn require_column(&self, name: &str) -> Result<&Column, TableError> {
        self.column(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    pub fn float_column(&self, name: &str) -> Result<&[Option<f64>], TableError> {
        match self.require_column(name)? {
            Column::Float(values) => Ok(values),
            other => Err(TableError::ColumnType {
                name: name.to_string(),
                expected: "float",
                actual: other.type_name(),
            }),
        }
    }

    pub fn text_column(&self, name: &str) -> Result<&[Option<String>], TableError> {
        match self.require_column(name)? {
            Column::Text(values) => Ok(values),
            other => Err(TableError::ColumnType {
                name: name.to_string(),
                expected: "text",
                actual: other.type_name(),
            }),
        }
    }

    /// Append `column`, or replace the existing column called `name` in place.
    ///
    /// The column must have one value per row, unless the table has no
    /// columns yet.
    pub fn with_column(
        &mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<&mut Self, TableError> {
        let name = name.into();
        if !self.columns.is_empty() && column.len() != self.row_count() {
            return Err(TableError::LengthMismatch {
                name,
                expected: self.row_count(),
                actual: column.len(),
            });
        }

        match self.position(&name) {
            Some(idx) => self.columns[idx] = column,
            None => {
                self.names.push(name);
                self.columns.push(column);
            }
        }
        Ok(self)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            (
                "average_snowfall".to_string(),
                Column::Float(vec![Some(20.0), None]),
            ),
            (
                "site".to_string(),
                Column::Text(vec![Some("A".to_string()), Some("B".to_string())]),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_columns_keeps_order() {
        let table = sample();
        assert_eq!(table.column_names(), &["average_snowfall", "site"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_from_columns_rejects_duplicates() {
        let result = Table::from_columns(vec![
            ("site".to_string(), Column::Text(vec![None])),
            ("site".to_string(), Column::Text(vec![None])),
        ]);
        assert_eq!(
            result.unwrap_err(),
            TableError::DuplicateColumn("site".to_string())
        );
    }

    #[test]
    fn test_with_column_length_mismatch() {
        let mut table = sample();
        let err = table
            .with_column("extra", Column::Float(vec![Some(1.0)]))
            .unwrap_err();
        assert!(matches!(err, TableError::LengthMismatch { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn test_with_column_replaces_existing() {
        let mut table = sample();
        table
            .with_column("site", Column::Text(vec![None, Some("C".to_string())]))
            .unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.text_column("site").unwrap()[1].as_deref(), Some("C"));
    }

    #[test]
    fn test_typed_accessors() {
        let table = sample();
        assert!(table.float_column("average_snowfall").is_ok());
        assert!(matches!(
            table.float_column("site"),
            Err(TableError::ColumnType { actual: "text", .. })
        ));
        assert_eq!(
            table.text_column("nope").unwrap_err(),
            TableError::MissingColumn("nope".to_string())
        );
    }

    #[test]
    fn test_non_null_count() {
        let table = sample();
        let column = table.column("average_snowfall").unwrap();
        assert_eq!(column.non_null_count(), 1);
        assert!(column.is_null(1));
        assert!(!column.is_null(0));
    }
}
