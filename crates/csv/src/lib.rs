//! CSV loader for external input tables.
//!
//! The first record names the columns and the first column holds time.
//! Every following record is one time step.
//!
//! ```text
//! time,u1,u2
//! 0.0,1.0,10.0
//! 1.0,2.0,20.0
//! ```
//!
//! A leading `sep=<c>` line selects the field delimiter, and a trailing
//! delimiter at the end of each line is tolerated. Lines holding only
//! whitespace or delimiters are skipped. Errors report file line numbers,
//! counting the `sep=` line.

mod error;

pub use error::CsvError;

use std::{fs, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use extin_core::{RawTable, TableLoader};
use tracing::debug;

/// Loads [`RawTable`]s from delimited text files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvLoader {
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter used when the input has no `sep=` line.
    #[must_use]
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parses a table from CSV text.
    ///
    /// # Errors
    ///
    /// Returns a [`CsvError`] if the text has no header, a row has the wrong
    /// number of fields, or a value is not a number.
    pub fn parse(&self, text: &str) -> Result<RawTable, CsvError> {
        let (delimiter, body, skipped) = match split_separator_line(text) {
            Some((delimiter, body)) => (delimiter, body, 1),
            None => (self.delimiter, text, 0),
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(body.as_bytes());

        let mut records = reader.records();
        let header = records.next().ok_or(CsvError::MissingHeader)??;
        let trailing = ends_with_empty_field(&header);
        let names: Vec<String> = fields(&header, trailing).map(str::to_owned).collect();
        if names.is_empty() {
            return Err(CsvError::MissingHeader);
        }

        let mut columns = vec![Vec::new(); names.len()];
        for record in records {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map_or(0, csv::Position::line) + skipped;

            let drop_last = trailing && ends_with_empty_field(&record);
            let found = fields(&record, drop_last).count();
            if found != names.len() {
                return Err(CsvError::Ragged {
                    line,
                    expected: names.len(),
                    found,
                });
            }

            for ((field, column), name) in fields(&record, drop_last).zip(&mut columns).zip(&names) {
                let value = field.parse::<f64>().map_err(|_| CsvError::InvalidNumber {
                    line,
                    column: name.clone(),
                    value: field.to_owned(),
                })?;
                column.push(value);
            }
        }

        let table = RawTable::from_columns(names.into_iter().zip(columns))?;
        debug!(
            rows = table.rows(),
            columns = table.columns(),
            "parsed csv input table"
        );
        Ok(table)
    }
}

impl TableLoader for CsvLoader {
    type Error = CsvError;

    fn load(&self, path: &Path) -> Result<RawTable, Self::Error> {
        let text = fs::read_to_string(path)?;
        self.parse(&text)
    }
}

/// Splits off a leading `sep=<c>` line, returning the delimiter and the rest.
fn split_separator_line(text: &str) -> Option<(u8, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    let separator = first.trim_end_matches('\r').strip_prefix("sep=")?;

    match separator.as_bytes() {
        [delimiter] => Some((*delimiter, rest)),
        _ => None,
    }
}

fn ends_with_empty_field(record: &StringRecord) -> bool {
    record.len() > 1 && record.get(record.len() - 1) == Some("")
}

/// Iterates the fields of `record`, leaving out the last one if `drop_last`.
fn fields(record: &StringRecord, drop_last: bool) -> impl Iterator<Item = &str> {
    let len = if drop_last {
        record.len() - 1
    } else {
        record.len()
    };
    record.iter().take(len)
}
