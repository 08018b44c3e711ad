//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};

/// Reads a CSV file with a header row into a DataFrame of string columns.
///
/// Schema inference is disabled so names keep their exact text and numeric
/// columns are parsed by the caller with row-level diagnostics.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Borrow column `index` of a string DataFrame as optional cells.
pub(crate) fn str_column(df: &DataFrame, index: usize) -> Result<Vec<Option<&str>>> {
    let column = df.get_columns().get(index)
        .with_context(|| format!("[io::csv::read] Missing column {index}, found {} columns", df.width()))?;
    Ok(column.str()?.into_iter().collect())
}

/// Parse a numeric cell, reporting the row (1-based, after the header) on failure.
pub(crate) fn parse_f64(cell: Option<&str>, row: usize, field: &str) -> Result<f64> {
    let text = cell.map(str::trim).filter(|s| !s.is_empty())
        .with_context(|| format!("[io::csv::read] Row {row}: missing value for '{field}'"))?;
    text.parse::<f64>()
        .with_context(|| format!("[io::csv::read] Row {row}: invalid number '{text}' for '{field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_all_columns_as_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "name,value,other").unwrap();
        writeln!(file, "\"Adams, County\",12.5,x").unwrap();
        writeln!(file, "Boone,007,y").unwrap();
        drop(file);

        let df = read_csv(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(str_column(&df, 0).unwrap(), vec![Some("Adams, County"), Some("Boone")]);
        assert_eq!(str_column(&df, 1).unwrap(), vec![Some("12.5"), Some("007")]);
        assert!(str_column(&df, 3).is_err());
    }

    #[test]
    fn parse_reports_missing_and_invalid_cells() {
        assert_eq!(parse_f64(Some(" 3.25 "), 1, "x").unwrap(), 3.25);
        assert!(parse_f64(None, 2, "x").is_err());
        assert!(parse_f64(Some(""), 3, "x").is_err());
        let err = parse_f64(Some("abc"), 4, "pop").unwrap_err();
        assert!(err.to_string().contains("Row 4"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_csv(&dir.path().join("absent.csv")).is_err());
    }
}
