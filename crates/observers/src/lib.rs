//! Reusable observers for the rootline solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasEstimate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Recorder`]: keeps a copy of every event
//! - [`Progress`]: writes one line per event to any [`std::io::Write`]
//!
//! [`Observer`]: rootline_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod progress;
mod recorder;

pub use progress::Progress;
pub use recorder::Recorder;
