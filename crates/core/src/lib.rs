//! Core traits for the rootline solvers.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! function sources build on:
//!
//! - [`Function`]: a real-to-real oracle the solvers evaluate
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
