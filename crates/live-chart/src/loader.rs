// File: crates/live-chart/src/loader.rs
// Summary: Full (non-incremental) read of one numeric column from a CSV file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::RedrawError;

/// Read every row of `path` and return the values of `column` in row order.
///
/// The file is opened fresh on each call; nothing is cached between calls.
/// An empty cell, or a row too short to reach `column`, yields NaN and shows
/// up as a gap in the line.
pub fn load_column(path: &Path, column: &str) -> Result<Vec<f64>, RedrawError> {
    let file = File::open(path).map_err(|source| RedrawError::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_column(file, column, path)
}

/// Same as [`load_column`] over any reader; `path` is only used in errors.
pub fn read_column<R: Read>(reader: R, column: &str, path: &Path) -> Result<Vec<f64>, RedrawError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let idx = rdr
        .headers()
        .map_err(|e| io_or_csv(e, path))?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| RedrawError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        })?;

    let mut values = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| io_or_csv(e, path))?;
        let v = match rec.get(idx) {
            None | Some("") => f64::NAN,
            Some(raw) => raw.parse::<f64>().map_err(|_| RedrawError::MalformedRow {
                row: i + 1,
                column: column.to_string(),
                value: raw.to_string(),
            })?,
        };
        values.push(v);
    }
    Ok(values)
}

/// I/O failures mid-read are reported like a failed open.
fn io_or_csv(err: csv::Error, path: &Path) -> RedrawError {
    match err.kind() {
        csv::ErrorKind::Io(e) => RedrawError::FileUnavailable {
            path: path.to_path_buf(),
            source: std::io::Error::new(e.kind(), e.to_string()),
        },
        _ => RedrawError::Csv(err),
    }
}
