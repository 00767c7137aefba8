use std::io;

use extin_core::TableError;
use thiserror::Error;

/// Errors that can occur when loading a CSV input table.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to read csv input")]
    Io(#[from] io::Error),

    #[error("malformed csv input")]
    Csv(#[from] csv::Error),

    /// The input contains no header row naming the columns.
    #[error("csv input has no header row")]
    MissingHeader,

    /// A data row has a different number of fields than the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    Ragged {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number `{value}` in column `{column}`")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Table(#[from] TableError),
}
