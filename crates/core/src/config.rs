use std::path::PathBuf;

use serde::Deserialize;

use crate::Boundary;

/// Configuration for loading external inputs.
///
/// Without an `input_file` the external input stays inactive and the
/// simulation keeps its own input values.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use extin_core::Config;
///
/// let config = Config {
///     input_file: Some("inputs.csv".into()),
///     input_dir: Some("data".into()),
///     ..Config::default()
/// };
///
/// assert_eq!(config.resolved_path(), Some(PathBuf::from("data/inputs.csv")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The input table file.
    pub input_file: Option<PathBuf>,
    /// Directory that `input_file` is resolved against.
    pub input_dir: Option<PathBuf>,
    pub boundary: Boundary,
    /// Log the resolved table at `INFO` after loading.
    pub dump_table: bool,
}

impl Config {
    /// Returns the path of the input file, joined with `input_dir` if set.
    ///
    /// An absolute `input_file` is used as-is and `input_dir` is ignored.
    /// Returns `None` when no input file is configured.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        let file = self.input_file.as_ref()?;
        Some(match &self.input_dir {
            Some(dir) => dir.join(file),
            None => file.clone(),
        })
    }
}
