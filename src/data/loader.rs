use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Column, ColumnData, Table};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Terminal parse failures. No partial [`Table`] is ever produced: a single
/// ragged row rejects the whole file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input contained no header row (empty file, or comments only).
    #[error("no header row found in input")]
    MissingHeader,

    /// Delimited parsing failed, most commonly a row whose field count does
    /// not match the header.
    #[error("malformed table: {0}")]
    Malformed(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse a recording export from disk.
pub fn load_file(path: &Path) -> Result<Table, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_recording(&text)?;
    log::info!(
        "loaded {}: {} rows x {} columns",
        path.display(),
        table.n_rows(),
        table.n_columns()
    );
    Ok(table)
}

/// Parse raw tabular text into a [`Table`].
///
/// Lines beginning with `#` — the metadata/comment lines the acquisition
/// software writes before and between data rows — are discarded before the
/// header and field rows are parsed. The first remaining row names the
/// columns; every later row must have the same field count.
pub fn parse_recording(text: &str) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::MissingHeader);
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        // The reader is strict about record lengths, so a ragged row
        // surfaces here and aborts the load.
        let record = record?;
        for (i, field) in record.iter().enumerate() {
            cells[i].push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column {
            name,
            data: type_column(raw),
        })
        .collect();

    Ok(Table::new(columns))
}

// ---------------------------------------------------------------------------
// Column typing
// ---------------------------------------------------------------------------

/// Tag a column numeric or textual, once, at load time.
///
/// A column is numeric when every non-blank cell parses as a float; blank
/// cells become NaN so row alignment is preserved. A column with no rows
/// stays textual — there is nothing to infer numbers from.
fn type_column(raw: Vec<String>) -> ColumnData {
    if raw.is_empty() {
        return ColumnData::Text(raw);
    }

    let mut numeric = Vec::with_capacity(raw.len());
    for i in 0..raw.len() {
        let cell = raw[i].trim();
        if cell.is_empty() {
            numeric.push(f64::NAN);
            continue;
        }
        match cell.parse::<f64>() {
            Ok(v) => numeric.push(v),
            Err(_) => return ColumnData::Text(raw),
        }
    }
    ColumnData::Numeric(numeric)
}
