use serde::Deserialize;

/// Boundary policy
///
/// Controls what happens when a query time falls before the first or after
/// the last timestamp of the input table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Extend the first or last interval linearly, using that interval's slope.
    #[default]
    Extrapolate,
    /// Hold the first or last sample.
    Clamp,
    /// Return an error instead of writing any values.
    Error,
}
