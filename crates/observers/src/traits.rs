//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::{CanStopEarly, HasIteration};
//!
//! struct StopAfter(usize);
//!
//! impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iter() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use rootline_solvers::{bisection, newton};

/// An event that carries a 1-based iteration index.
pub trait HasIteration {
    /// Returns the iteration index for this event.
    fn iter(&self) -> usize;
}

/// An event that carries the solver's current root estimate.
pub trait HasEstimate {
    /// Returns the estimate produced by this iteration.
    fn estimate(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection ---

impl HasIteration for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

/// The midpoint evaluated in this iteration.
impl HasEstimate for bisection::Event {
    fn estimate(&self) -> f64 {
        self.midpoint
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton ---

impl HasIteration for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

/// The new iterate produced by this step.
impl HasEstimate for newton::Event {
    fn estimate(&self) -> f64 {
        self.x_new
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
