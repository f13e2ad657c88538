use std::fmt;

use crate::display::Float;

/// Iteration event emitted by the bisection solver.
///
/// Emitted after the bracket has been shrunk, so `bracket` is the interval
/// the next iteration will split.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket after this iteration's update.
    pub bracket: [f64; 2],
    /// Midpoint evaluated in this iteration.
    pub midpoint: f64,
    /// Function value at the midpoint.
    pub value: f64,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, right] = self.bracket;
        write!(
            f,
            "Iteration {}: Interval = [{}, {}], Midpoint = {}, f(Midpoint) = {}",
            self.iter,
            Float(left),
            Float(right),
            Float(self.midpoint),
            Float(self.value),
        )
    }
}
