/// Sink for per-iteration solver events.
///
/// Each solver hands its observer one event per iteration (bracket and
/// midpoint for bisection, iterate and step for Newton-Raphson). Returning
/// `Some(action)` asks the solver to act on it, usually to stop early;
/// returning `None` lets the iteration continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that ignores everything.
pub trait Observer<E, A> {
    /// Receives one event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
