use tracing::trace;

/// Remembers the bracket used by the previous lookup.
///
/// Simulations query times that are close to the previous query, moving
/// forward while stepping and occasionally backward when a step is retried.
/// Walking from the remembered bracket costs O(1) amortized per lookup
/// instead of a fresh search over the whole time axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

/// Two consecutive timestamps surrounding a query time.
///
/// `index` is the row of `start`; `end` belongs to row `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl Cursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lower row index of the current bracket.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves the cursor to the bracket for `time` and returns it.
    ///
    /// The cursor walks backward while `time` is before the bracket start and
    /// forward while `time` is after the bracket end.
    /// Outside the time axis the bracket saturates at the first or last
    /// interval.
    ///
    /// Returns `None` if `times` has fewer than two samples.
    pub fn seek(&mut self, times: &[f64], time: f64) -> Option<Bracket> {
        let last = times.len().checked_sub(2)?;
        let from = self.index;
        let mut index = from.min(last);

        while index > 0 && time < times[index] {
            index -= 1;
        }
        while index < last && time > times[index + 1] {
            index += 1;
        }

        if index != from {
            trace!(from, to = index, time, "input cursor moved");
        }
        self.index = index;

        Some(Bracket {
            index,
            start: times[index],
            end: times[index + 1],
        })
    }
}

impl Bracket {
    /// Interpolates between `first` (at `start`) and `second` (at `end`).
    ///
    /// Outside the bracket this is the linear extension of the interval.
    /// Equal values are returned as-is, and a zero-width bracket takes the
    /// value on the side of `time`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn interpolate(&self, time: f64, first: f64, second: f64) -> f64 {
        if first == second {
            return first;
        }

        let dt = self.end - self.start;
        if dt == 0.0 {
            return if time < self.start { first } else { second };
        }

        (first * (dt + self.start - time) + (time - self.start) * second) / dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const TIMES: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];

    #[test]
    fn seek_moves_forward_and_backward() {
        let mut cursor = Cursor::new();

        assert_eq!(cursor.seek(&TIMES, 2.5).unwrap().index, 2);
        assert_eq!(cursor.seek(&TIMES, 3.5).unwrap().index, 3);
        assert_eq!(cursor.seek(&TIMES, 0.5).unwrap().index, 0);
        assert_eq!(cursor.seek(&TIMES, 1.5).unwrap().index, 1);
    }

    #[test]
    fn seek_saturates_outside_range() {
        let mut cursor = Cursor::new();

        let bracket = cursor.seek(&TIMES, 10.0).unwrap();
        assert_eq!(bracket.index, 3);
        assert_relative_eq!(bracket.start, 3.0);
        assert_relative_eq!(bracket.end, 4.0);

        let bracket = cursor.seek(&TIMES, -10.0).unwrap();
        assert_eq!(bracket.index, 0);
    }

    #[test]
    fn seek_stays_on_shared_endpoint() {
        let mut cursor = Cursor::new();

        // A time equal to a bracket end does not advance the cursor.
        assert_eq!(cursor.seek(&TIMES, 1.0).unwrap().index, 0);
        assert_eq!(cursor.seek(&TIMES, 1.0).unwrap().index, 0);

        // Coming from above, it stops on the bracket that starts there.
        cursor.seek(&TIMES, 3.5);
        assert_eq!(cursor.seek(&TIMES, 2.0).unwrap().index, 2);
    }

    #[test]
    fn seek_needs_two_samples() {
        let mut cursor = Cursor::new();
        assert!(cursor.seek(&[], 0.0).is_none());
        assert!(cursor.seek(&[1.0], 0.0).is_none());
    }

    #[test]
    fn seek_recovers_from_stale_index() {
        let mut cursor = Cursor::new();
        cursor.seek(&TIMES, 3.5);

        let bracket = cursor.seek(&[0.0, 1.0, 2.0], 0.5).unwrap();
        assert_eq!(bracket.index, 0);
    }

    #[test]
    fn interpolate_inside_and_outside() {
        let bracket = Bracket {
            index: 0,
            start: 0.0,
            end: 1.0,
        };

        assert_relative_eq!(bracket.interpolate(0.5, 10.0, 20.0), 15.0);
        assert_relative_eq!(bracket.interpolate(0.25, 10.0, 20.0), 12.5);
        assert_relative_eq!(bracket.interpolate(-1.0, 10.0, 20.0), 0.0);
        assert_relative_eq!(bracket.interpolate(2.0, 10.0, 20.0), 30.0);
    }

    #[test]
    fn interpolate_zero_width_bracket() {
        let bracket = Bracket {
            index: 1,
            start: 1.0,
            end: 1.0,
        };

        assert_relative_eq!(bracket.interpolate(0.5, 1.0, 2.0), 1.0);
        assert_relative_eq!(bracket.interpolate(1.5, 1.0, 2.0), 2.0);
        assert_relative_eq!(bracket.interpolate(7.0, 3.0, 3.0), 3.0);
    }
}
