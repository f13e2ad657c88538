/// Indicates why the Newton-Raphson solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// A step moved the iterate by less than the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate: the iterate produced by the last step.
    pub root: f64,

    /// Size of the last step, `|root - previous iterate|`.
    pub step: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
