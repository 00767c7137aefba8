/// Indicates how an evaluation resolved the input values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No table is loaded; the input vector was left untouched.
    Inactive,

    /// The query time matched a timestamp and its row was copied.
    Exact,

    /// Values were interpolated between two rows, or linearly extended past
    /// the ends of the table.
    Interpolated,

    /// The query time was outside the table and the nearest row was held.
    Clamped,
}

impl Status {
    /// Returns true if the evaluation wrote the input vector.
    #[must_use]
    pub fn wrote_inputs(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Input values resolved at a single query time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// One value per input variable; empty when inactive.
    pub values: Vec<f64>,

    pub status: Status,
}
