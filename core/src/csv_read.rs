//! CSV ingestion: turn a byte stream into rows of string cells.
//!
//! Rows may have unequal cell counts and whitespace is preserved as-is;
//! row shape is the extractor's concern, not the reader's.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::error_codes;

/// Errors produced while reading CSV input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CsvError {
    #[error(
        "[PARDIFF_CSV_001] failed to read CSV input: {0}. Suggestion: check that the path exists and is readable."
    )]
    Io(#[from] std::io::Error),

    #[error(
        "[PARDIFF_CSV_002] malformed CSV input: {0}. Suggestion: check that the file is plain CSV text."
    )]
    Malformed(#[from] csv::Error),

    #[error(
        "[PARDIFF_CSV_003] CSV input contains no rows. Suggestion: check that the file is not empty."
    )]
    EmptyInput,
}

impl CsvError {
    pub fn code(&self) -> &'static str {
        match self {
            CsvError::Io(_) => error_codes::CSV_IO,
            CsvError::Malformed(_) => error_codes::CSV_MALFORMED,
            CsvError::EmptyInput => error_codes::CSV_EMPTY_INPUT,
        }
    }
}

/// Read all rows from a CSV stream.
///
/// Rows are returned exactly as written: unequal cell counts are allowed and
/// no trimming is applied. Input with zero rows is rejected.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Vec<String>>, CsvError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        return Err(CsvError::EmptyInput);
    }

    Ok(rows)
}

/// Read all rows from a CSV file on disk.
pub fn read_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>, CsvError> {
    let file = File::open(path)?;
    read_rows(file)
}
