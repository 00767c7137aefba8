use std::{error::Error as StdError, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when building a [`RawTable`](crate::RawTable) or an
/// [`InputTable`](crate::InputTable).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// The table has no columns at all, so there is no time axis.
    #[error("table has no time column")]
    MissingTimeColumn,

    /// The column-major data does not fill `columns × rows` exactly.
    #[error("table data has {found} values, expected {expected}")]
    ShapeMismatch { expected: usize, found: usize },

    /// A timestamp is NaN or infinite.
    #[error("non-finite time {value} at row {row}")]
    NonFiniteTime { row: usize, value: f64 },

    /// A timestamp is smaller than the one before it.
    #[error("time decreases at row {row}: {current} follows {previous}")]
    DecreasingTime {
        row: usize,
        previous: f64,
        current: f64,
    },
}

/// Errors that can occur while loading the external input table.
///
/// Any `LoadError` means the promised input data is unavailable,
/// so a simulation should not proceed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input file `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("invalid input table in `{}`", .path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

impl LoadError {
    pub(crate) fn read<E: StdError + Send + Sync + 'static>(path: PathBuf, err: E) -> Self {
        Self::Read {
            path,
            source: Box::new(err),
        }
    }
}

/// Errors that can occur when evaluating inputs at a query time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalError {
    /// The destination slice does not have one slot per input variable.
    #[error("input vector has {found} slots, expected {expected}")]
    WidthMismatch { expected: usize, found: usize },

    #[error("query time is not finite: {time}")]
    NonFiniteTime { time: f64 },

    /// The query time lies outside the table and the boundary policy is
    /// [`Boundary::Error`](crate::Boundary::Error).
    #[error("time {time} is outside the input table range [{start}, {end}]")]
    OutOfRange { time: f64, start: f64, end: f64 },
}
