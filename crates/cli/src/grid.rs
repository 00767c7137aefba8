use thiserror::Error;

/// Largest number of query times a grid may hold.
pub const MAX_POINTS: usize = 100_000_000;

/// Evenly spaced query times from `start` to `stop`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: f64,
    step: f64,
    points: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("grid bounds must be finite: start = {start}, stop = {stop}")]
    NonFiniteBounds { start: f64, stop: f64 },

    #[error("step must be finite and positive, got {step}")]
    InvalidStep { step: f64 },

    #[error("stop {stop} is before start {start}")]
    Reversed { start: f64, stop: f64 },

    #[error("grid from {start} to {stop} in steps of {step} exceeds {max} points", max = MAX_POINTS)]
    TooManyPoints { start: f64, stop: f64, step: f64 },
}

impl TimeGrid {
    /// Creates a grid of times `start + i * step` not exceeding `stop`.
    ///
    /// A `stop` within rounding error of a grid point includes that point.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, GridError> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(GridError::NonFiniteBounds { start, stop });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(GridError::InvalidStep { step });
        }
        if stop < start {
            return Err(GridError::Reversed { start, stop });
        }

        let intervals = ((stop - start) / step + 1e-9).floor();
        #[allow(clippy::cast_precision_loss)]
        let max = MAX_POINTS as f64;
        if !intervals.is_finite() || intervals >= max {
            return Err(GridError::TooManyPoints { start, stop, step });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let points = intervals as usize + 1;

        Ok(Self {
            start,
            step,
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.points).map(|i| self.start + i as f64 * self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn includes_both_ends() {
        let grid = TimeGrid::new(0.0, 1.0, 0.25).unwrap();
        assert_eq!(grid.iter().collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn tolerates_rounding_at_stop() {
        let grid = TimeGrid::new(0.0, 1.0, 0.1).unwrap();
        assert_eq!(grid.len(), 11);
        assert_relative_eq!(grid.iter().last().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn stop_between_points_is_excluded() {
        let grid = TimeGrid::new(-1.0, 0.9, 0.5).unwrap();
        assert_eq!(grid.iter().collect::<Vec<_>>(), vec![-1.0, -0.5, 0.0, 0.5]);
    }

    #[test]
    fn single_point_grid() {
        let grid = TimeGrid::new(2.0, 2.0, 1.0).unwrap();
        assert_eq!(grid.iter().collect::<Vec<_>>(), vec![2.0]);
    }

    #[test]
    fn rejects_invalid_grids() {
        assert!(matches!(
            TimeGrid::new(0.0, 1.0, 0.0),
            Err(GridError::InvalidStep { .. })
        ));
        assert!(matches!(
            TimeGrid::new(0.0, 1.0, f64::NAN),
            Err(GridError::InvalidStep { .. })
        ));
        assert!(matches!(
            TimeGrid::new(1.0, 0.0, 0.1),
            Err(GridError::Reversed { .. })
        ));
        assert!(matches!(
            TimeGrid::new(0.0, f64::INFINITY, 0.1),
            Err(GridError::NonFiniteBounds { .. })
        ));
        assert!(matches!(
            TimeGrid::new(-1e308, 1e308, 1.0),
            Err(GridError::TooManyPoints { .. })
        ));
        assert!(matches!(
            TimeGrid::new(0.0, 1.0, 1e-12),
            Err(GridError::TooManyPoints { .. })
        ));
    }

    #[test]
    fn accepts_grid_just_under_limit() {
        #[allow(clippy::cast_precision_loss)]
        let stop = (MAX_POINTS - 1) as f64;
        let grid = TimeGrid::new(0.0, stop, 1.0).unwrap();
        assert_eq!(grid.len(), MAX_POINTS);
    }
}
