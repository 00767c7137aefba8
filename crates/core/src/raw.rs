use crate::TableError;

/// A rectangular table of samples as produced by a [`TableLoader`](crate::TableLoader).
///
/// Columns are named and stored column-major: all rows of column 0, then all
/// rows of column 1, and so on.
/// Column 0 is the time axis by convention.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    names: Vec<String>,
    data: Vec<f64>,
    rows: usize,
}

impl RawTable {
    /// Creates a table from column names and column-major data.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingTimeColumn`] if `names` is empty, or
    /// [`TableError::ShapeMismatch`] if `data` does not hold exactly
    /// `names.len() * rows` values.
    pub fn new(names: Vec<String>, data: Vec<f64>, rows: usize) -> Result<Self, TableError> {
        if names.is_empty() {
            return Err(TableError::MissingTimeColumn);
        }

        let expected = names.len() * rows;
        if data.len() != expected {
            return Err(TableError::ShapeMismatch {
                expected,
                found: data.len(),
            });
        }

        Ok(Self { names, data, rows })
    }

    /// Creates a table from named columns.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if there are no columns or the columns have
    /// different lengths.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut data = Vec::new();
        let mut rows = None;

        for (name, column) in columns {
            let expected = *rows.get_or_insert(column.len());
            if column.len() != expected {
                return Err(TableError::ShapeMismatch {
                    expected: expected * (names.len() + 1),
                    found: data.len() + column.len(),
                });
            }
            names.push(name.into());
            data.extend(column);
        }

        Self::new(names, data, rows.unwrap_or(0))
    }

    /// Returns all column names, including the time column.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.names.len()
    }

    /// Returns the samples of column `index`, or `None` if out of range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        if index >= self.names.len() {
            return None;
        }
        let start = index * self.rows;
        Some(&self.data[start..start + self.rows])
    }

    /// Returns the time column.
    #[must_use]
    pub fn time(&self) -> &[f64] {
        &self.data[..self.rows]
    }
}
