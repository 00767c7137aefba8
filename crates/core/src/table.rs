use ndarray::{Array2, ArrayView1};
use tracing::{Level, debug, enabled, info};

use crate::{ColumnMapping, RawTable, TableError};

/// Tracing target used for the resolved-table dump.
pub const DUMP_TARGET: &str = "extin::dump";

/// Time-stamped input samples aligned to the simulation's input order.
///
/// Rows are time steps and columns are input variables, stored in a single
/// contiguous row-major buffer so that a whole input vector can be read with
/// one slice.
/// Timestamps are finite and non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTable {
    times: Vec<f64>,
    values: Array2<f64>,
}

impl InputTable {
    /// Creates a table from timestamps and a `(times.len(), width)` value matrix.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the shapes disagree or the timestamps are
    /// not finite and non-decreasing.
    pub fn new(times: Vec<f64>, values: Array2<f64>) -> Result<Self, TableError> {
        if values.nrows() != times.len() {
            return Err(TableError::ShapeMismatch {
                expected: times.len() * values.ncols(),
                found: values.len(),
            });
        }
        validate_times(&times)?;

        // Row slices rely on standard layout.
        let values = values.as_standard_layout().into_owned();
        Ok(Self { times, values })
    }

    /// Builds a table from a raw table using a column mapping.
    ///
    /// The table has one column per entry in `mapping`; inputs without a
    /// matched column are zero for every row.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the time column is not finite and
    /// non-decreasing.
    pub fn from_raw(raw: &RawTable, mapping: &ColumnMapping) -> Result<Self, TableError> {
        let times = raw.time().to_vec();
        validate_times(&times)?;

        let mut values = Array2::zeros((raw.rows(), mapping.len()));
        for (input, index) in mapping.iter().enumerate() {
            if let Some(samples) = index.and_then(|index| raw.column(index)) {
                values
                    .column_mut(input)
                    .assign(&ArrayView1::from(samples));
            }
        }

        Ok(Self { times, values })
    }

    /// Returns the number of time steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the number of input variables per row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the input vector at time step `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn row(&self, index: usize) -> &[f64] {
        let width = self.width();
        let start = index * width;
        // Always standard layout, so the slice exists.
        &self.values.as_slice().unwrap_or_default()[start..start + width]
    }

    /// Returns the samples of input variable `input` over all time steps.
    #[must_use]
    pub fn column(&self, input: usize) -> Option<ArrayView1<'_, f64>> {
        (input < self.width()).then(|| self.values.column(input))
    }

    /// Returns the first and last timestamps, or `None` for an empty table.
    #[must_use]
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.times.last()?))
    }

    /// Logs every row of the table on the [`DUMP_TARGET`] target.
    ///
    /// With `force` the rows are logged at `INFO`; otherwise they are logged
    /// at `DEBUG`, and only formatted if that level is enabled for the target.
    pub fn dump(&self, force: bool) {
        if force {
            self.dump_lines(|line| info!(target: DUMP_TARGET, "{line}"));
        } else if enabled!(target: DUMP_TARGET, Level::DEBUG) {
            self.dump_lines(|line| debug!(target: DUMP_TARGET, "{line}"));
        }
    }

    fn dump_lines(&self, mut emit: impl FnMut(&str)) {
        emit(&format!(
            "external input table: {} rows, {} inputs",
            self.len(),
            self.width()
        ));
        for (time, row) in self.times.iter().zip(self.values.rows()) {
            let values = row
                .iter()
                .enumerate()
                .map(|(input, value)| format!("u{}(t)={value}", input + 1))
                .collect::<Vec<_>>()
                .join(" ");
            emit(&format!("t={time} {values}"));
        }
        emit("end of external input table");
    }
}

fn validate_times(times: &[f64]) -> Result<(), TableError> {
    for (row, &value) in times.iter().enumerate() {
        if !value.is_finite() {
            return Err(TableError::NonFiniteTime { row, value });
        }
    }

    if let Some(index) = times.windows(2).position(|pair| pair[1] < pair[0]) {
        return Err(TableError::DecreasingTime {
            row: index + 1,
            previous: times[index],
            current: times[index + 1],
        });
    }

    Ok(())
}
