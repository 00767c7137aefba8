mod status;

pub use status::{Sample, Status};

use tracing::{debug, info, warn};

use crate::{
    Boundary, ColumnMapping, Config, Cursor, EvalError, InputNames, InputTable, LoadError,
    TableLoader,
};

/// Injects tabulated input values into a simulation.
///
/// An `ExternalInput` owns the input table and the cursor remembering the
/// last bracket.
/// It is either active, holding a non-empty table, or inactive, in which case
/// every evaluation leaves the simulation's inputs untouched.
///
/// # Example
///
/// ```
/// use extin_core::{Boundary, ExternalInput, InputTable, Status};
/// use ndarray::array;
///
/// let table = InputTable::new(vec![0.0, 1.0, 2.0], array![[10.0], [20.0], [10.0]]).unwrap();
/// let mut input = ExternalInput::from_table(table, Boundary::Extrapolate);
///
/// let mut u = [0.0];
/// assert_eq!(input.evaluate(0.5, &mut u), Ok(Status::Interpolated));
/// assert_eq!(u, [15.0]);
/// assert_eq!(input.evaluate(1.0, &mut u), Ok(Status::Exact));
/// assert_eq!(u, [20.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExternalInput {
    state: State,
    boundary: Boundary,
}

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Inactive,
    Active {
        table: InputTable,
        cursor: Cursor,
    },
}

impl ExternalInput {
    /// Creates an inactive external input.
    #[must_use]
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Creates an external input from an in-memory table.
    ///
    /// An empty table yields an inactive external input.
    #[must_use]
    pub fn from_table(table: InputTable, boundary: Boundary) -> Self {
        let state = if table.is_empty() {
            State::Inactive
        } else {
            State::Active {
                table,
                cursor: Cursor::new(),
            }
        };

        Self { state, boundary }
    }

    /// Loads the configured input file and aligns it to the simulation's inputs.
    ///
    /// Columns are matched to `names` by exact name; inputs with no matching
    /// column are zero for all time.
    /// When the config names no input file the result is inactive.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the loader fails or the table's time column
    /// is not finite and non-decreasing.
    pub fn load<L, N>(config: &Config, loader: &L, names: &N) -> Result<Self, LoadError>
    where
        L: TableLoader + ?Sized,
        N: InputNames + ?Sized,
    {
        let Some(path) = config.resolved_path() else {
            debug!("no input file configured, external input is inactive");
            return Ok(Self {
                state: State::Inactive,
                boundary: config.boundary,
            });
        };

        let raw = loader
            .load(&path)
            .map_err(|err| LoadError::read(path.clone(), err))?;

        let required = names.input_names();
        let mapping = ColumnMapping::new(&required, raw.names());
        for input in mapping.absent() {
            warn!(
                input = %required[input],
                path = %path.display(),
                "input variable has no column in input file, using 0"
            );
        }

        let table = InputTable::from_raw(&raw, &mapping).map_err(|source| LoadError::Table {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            rows = table.len(),
            inputs = table.width(),
            matched = mapping.matched_count(),
            "loaded external inputs"
        );
        table.dump(config.dump_table);

        if table.is_empty() {
            debug!(path = %path.display(), "input file has no rows, external input is inactive");
        }

        Ok(Self::from_table(table, config.boundary))
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// Returns the loaded table, or `None` when inactive.
    #[must_use]
    pub fn table(&self) -> Option<&InputTable> {
        match &self.state {
            State::Active { table, .. } => Some(table),
            State::Inactive => None,
        }
    }

    #[must_use]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Returns the lower row index of the current bracket, or `None` when inactive.
    #[must_use]
    pub fn cursor_index(&self) -> Option<usize> {
        match &self.state {
            State::Active { cursor, .. } => Some(cursor.index()),
            State::Inactive => None,
        }
    }

    /// Writes the input values at `time` into `inputs`.
    ///
    /// The cursor moves from the previous bracket to the one containing
    /// `time`.
    /// A timestamp match copies that row, otherwise each input is
    /// interpolated linearly between the bracketing rows.
    /// Outside the table, the [`Boundary`] policy applies.
    ///
    /// When inactive, returns [`Status::Inactive`] and leaves `inputs` untouched.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] without writing if `inputs` does not have one
    /// slot per input variable, `time` is not finite, or `time` is out of range
    /// under [`Boundary::Error`].
    #[allow(clippy::float_cmp)]
    pub fn evaluate(&mut self, time: f64, inputs: &mut [f64]) -> Result<Status, EvalError> {
        let State::Active { table, cursor } = &mut self.state else {
            return Ok(Status::Inactive);
        };

        if inputs.len() != table.width() {
            return Err(EvalError::WidthMismatch {
                expected: table.width(),
                found: inputs.len(),
            });
        }

        if !time.is_finite() {
            return Err(EvalError::NonFiniteTime { time });
        }

        let Some((start, end)) = table.time_range() else {
            return Ok(Status::Inactive);
        };

        let bracket = cursor.seek(table.times(), time);

        if time < start || time > end {
            match self.boundary {
                Boundary::Error => return Err(EvalError::OutOfRange { time, start, end }),
                Boundary::Clamp => {
                    let row = if time < start { 0 } else { table.len() - 1 };
                    inputs.copy_from_slice(table.row(row));
                    return Ok(Status::Clamped);
                }
                Boundary::Extrapolate => {}
            }
        }

        let Some(bracket) = bracket else {
            // A single sample has no interval to interpolate over.
            inputs.copy_from_slice(table.row(0));
            return Ok(if time == start {
                Status::Exact
            } else {
                Status::Clamped
            });
        };

        if time == bracket.start {
            inputs.copy_from_slice(table.row(bracket.index));
            return Ok(Status::Exact);
        }
        if time == bracket.end {
            inputs.copy_from_slice(table.row(bracket.index + 1));
            return Ok(Status::Exact);
        }

        let lower = table.row(bracket.index);
        let upper = table.row(bracket.index + 1);
        for ((input, &first), &second) in inputs.iter_mut().zip(lower).zip(upper) {
            *input = bracket.interpolate(time, first, second);
        }

        Ok(Status::Interpolated)
    }

    /// Evaluates the inputs at `time` into a new vector.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] under the same conditions as [`evaluate`](Self::evaluate).
    pub fn sample(&mut self, time: f64) -> Result<Sample, EvalError> {
        let width = self.table().map_or(0, InputTable::width);
        let mut values = vec![0.0; width];
        let status = self.evaluate(time, &mut values)?;

        Ok(Sample { values, status })
    }

    /// Drops the table and makes this external input inactive.
    ///
    /// Calling this more than once, or on an inactive input, does nothing.
    pub fn release(&mut self) {
        if self.is_active() {
            debug!("releasing external input table");
            self.state = State::Inactive;
        }
    }
}
