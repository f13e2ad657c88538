use rootline_core::Observer;

use crate::traits::HasEstimate;

/// Observer that keeps a copy of every event it sees.
///
/// Recording never steers the solver. Pass `&mut recorder` to keep access
/// to the events after the solve returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<E> {
    events: Vec<E>,
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> Recorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E: HasEstimate> Recorder<E> {
    /// Returns the root estimate of each recorded iteration.
    #[must_use]
    pub fn estimates(&self) -> Vec<f64> {
        self.events.iter().map(HasEstimate::estimate).collect()
    }
}

impl<E: Clone, A> Observer<E, A> for Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

/// Allows `&mut Recorder<E>` to be passed to solvers that take an observer
/// by value, so the events can be read after the solve completes.
impl<E: Clone, A> Observer<E, A> for &mut Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
