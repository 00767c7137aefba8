use std::path::Path;

use crate::RawTable;

/// A source of raw input tables.
///
/// Implementations parse an external file into a [`RawTable`] whose first
/// column is the time axis and whose remaining columns are named input
/// variables.
/// Parsing details belong entirely to the implementation.
pub trait TableLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads the table stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed into a
    /// rectangular table.
    fn load(&self, path: &Path) -> Result<RawTable, Self::Error>;
}

impl<L: TableLoader + ?Sized> TableLoader for &L {
    type Error = L::Error;

    fn load(&self, path: &Path) -> Result<RawTable, Self::Error> {
        (**self).load(path)
    }
}

/// Supplies the simulation's input-variable names in engine order.
///
/// The returned order defines the layout of every input vector written by
/// [`ExternalInput`](crate::ExternalInput).
pub trait InputNames {
    fn input_names(&self) -> Vec<String>;
}

impl<S: AsRef<str>> InputNames for [S] {
    fn input_names(&self) -> Vec<String> {
        self.iter().map(|name| name.as_ref().to_owned()).collect()
    }
}

impl<S: AsRef<str>> InputNames for Vec<S> {
    fn input_names(&self) -> Vec<String> {
        self.as_slice().input_names()
    }
}

impl<S: AsRef<str>, const N: usize> InputNames for [S; N] {
    fn input_names(&self) -> Vec<String> {
        self.as_slice().input_names()
    }
}

impl<T: InputNames + ?Sized> InputNames for &T {
    fn input_names(&self) -> Vec<String> {
        (**self).input_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Model;

    impl InputNames for Model {
        fn input_names(&self) -> Vec<String> {
            vec!["u1".into(), "u2".into()]
        }
    }

    #[test]
    fn names_from_slices_and_arrays() {
        assert_eq!(["a", "b"].input_names(), vec!["a", "b"]);
        assert_eq!(vec![String::from("x")].input_names(), vec!["x"]);
        assert_eq!((&Model).input_names(), vec!["u1", "u2"]);
    }
}
