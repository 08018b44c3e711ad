//! CSV writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::CsvWriter};

/// Write several DataFrames to one CSV file, each with its own header,
/// separated by a blank line.
pub(crate) fn write_csv_sections(frames: &mut [DataFrame], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for (i, df) in frames.iter_mut().enumerate() {
        if i > 0 { writeln!(writer)? }
        CsvWriter::new(&mut writer)
            .finish(df)
            .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))?;
    }

    writer.flush()
        .with_context(|| format!("[io::csv::write] Failed to flush CSV file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::{prelude::NamedFrom, series::Series};

    #[test]
    fn sections_are_separated_by_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let first = DataFrame::new(vec![
            Series::new("district".into(), vec![0u32, 1]).into(),
            Series::new("total".into(), vec![10i64, 20]).into(),
        ]).unwrap();
        let second = DataFrame::new(vec![
            Series::new("name".into(), vec!["a".to_string()]).into(),
        ]).unwrap();

        write_csv_sections(&mut [first, second], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "district,total\n0,10\n1,20\n\nname\na\n");
    }
}
