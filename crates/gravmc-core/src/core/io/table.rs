use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Table '{path}' must start with a 'name' column, found '{found}'")]
    MissingNameColumn { path: String, found: String },
    #[error("Invalid magnitude in '{path}', row {row}, column '{column}': '{value}'")]
    InvalidValue {
        path: String,
        row: usize,
        column: String,
        value: String,
    },
    #[error("Row {row} in '{path}' has {found} fields, expected {expected}")]
    RowLength {
        path: String,
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("Column '{0}' not found in table")]
    UnknownColumn(String),
}

/// A photometric magnitude table: one row per target, a leading `name`
/// column, then one numeric column per band. Observed tables additionally
/// carry `e_<band>` columns with the measurement errors.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeTable {
    names: Vec<String>,
    column_order: Vec<String>,
    columns: HashMap<String, Vec<f64>>,
}

impl MagnitudeTable {
    /// Reads a table from a comma-separated file with a header row.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let display = path.to_string_lossy().to_string();
        let file = std::fs::File::open(path).map_err(|e| TableError::Io {
            path: display.clone(),
            source: e,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| TableError::Csv {
                path: display.clone(),
                source: e,
            })?
            .clone();

        let mut header_iter = headers.iter();
        match header_iter.next() {
            Some("name") => {}
            other => {
                return Err(TableError::MissingNameColumn {
                    path: display,
                    found: other.unwrap_or("").to_string(),
                });
            }
        }
        let column_order: Vec<String> = header_iter.map(str::to_string).collect();

        let mut names = Vec::new();
        let mut data: Vec<Vec<f64>> = vec![Vec::new(); column_order.len()];

        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| TableError::Csv {
                path: display.clone(),
                source: e,
            })?;
            if record.len() != column_order.len() + 1 {
                return Err(TableError::RowLength {
                    path: display,
                    row: row + 1,
                    found: record.len(),
                    expected: column_order.len() + 1,
                });
            }
            names.push(record[0].to_string());
            for (index, field) in record.iter().skip(1).enumerate() {
                let value = field.parse::<f64>().map_err(|_| TableError::InvalidValue {
                    path: display.clone(),
                    row: row + 1,
                    column: column_order[index].clone(),
                    value: field.to_string(),
                })?;
                data[index].push(value);
            }
        }

        let columns = column_order.iter().cloned().zip(data).collect();
        Ok(Self {
            names,
            column_order,
            columns,
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Target names, in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Column headers after `name`, in file order.
    pub fn columns(&self) -> &[String] {
        &self.column_order
    }

    pub fn column(&self, name: &str) -> Result<&[f64], TableError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// The `e_<band>` error column, if the table carries one.
    pub fn error_column(&self, band: &str) -> Option<&[f64]> {
        self.columns.get(&format!("e_{band}")).map(Vec::as_slice)
    }
}
