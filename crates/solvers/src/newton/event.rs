use std::fmt;

use crate::display::Float;

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate the step started from.
    pub x: f64,
    /// Function value at `x`.
    pub fx: f64,
    /// Derivative value at `x`.
    pub dfx: f64,
    /// Next iterate, `x - fx / dfx`.
    pub x_new: f64,
}

impl Event {
    /// Returns the size of this step.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.x_new - self.x).abs()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Iteration {}: x = {}, f(x) = {}, Derivative = {}, New x = {}",
            self.iter,
            Float(self.x),
            Float(self.fx),
            Float(self.dfx),
            Float(self.x_new),
        )
    }
}
