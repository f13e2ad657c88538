/// Indicates why the bisection solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The bracket half-width fell to the tolerance.
    Converged,

    /// A midpoint evaluated to exactly zero.
    ExactRoot,

    /// The bracket cannot be split further in `f64` precision.
    PrecisionLimit,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub root: f64,

    /// Bracket when the solver finished.
    pub bracket: [f64; 2],

    /// Iteration count when the solver finished.
    pub iters: usize,
}
