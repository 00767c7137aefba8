//! Time-series input injection for simulation engines.
//!
//! This crate loads a table of time-stamped input samples and resolves the
//! simulation's input vector at any query time:
//!
//! - [`TableLoader`]: reads an external file into a [`RawTable`]
//! - [`InputNames`]: supplies the simulation's input names in engine order
//! - [`ColumnMapping`]: matches input names to table columns
//! - [`InputTable`]: resident, row-major samples aligned to the inputs
//! - [`Cursor`]: remembers the last bracket for incremental lookups
//! - [`ExternalInput`]: owns table and cursor, writes exact or
//!   interpolated values into the simulation's inputs
//!
//! Loading is configured through [`Config`]; without an input file the
//! [`ExternalInput`] is inactive and never touches the simulation's inputs.

mod boundary;
mod config;
mod cursor;
mod error;
mod evaluator;
mod loader;
mod mapping;
mod raw;
mod table;

pub use boundary::Boundary;
pub use config::Config;
pub use cursor::{Bracket, Cursor};
pub use error::{EvalError, LoadError, TableError};
pub use evaluator::{ExternalInput, Sample, Status};
pub use loader::{InputNames, TableLoader};
pub use mapping::ColumnMapping;
pub use raw::RawTable;
pub use table::{DUMP_TARGET, InputTable};
