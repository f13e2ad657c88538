use std::{fmt::Display, io};

use rootline_core::Observer;

use crate::traits::CanStopEarly;

/// Observer that writes one line per event to a writer.
///
/// Each line is the event's `Display` output. If a write fails, the first
/// error is kept and the solver is asked to stop early; check
/// [`Progress::finish`] after solving.
#[derive(Debug)]
pub struct Progress<W> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: io::Write> Progress<W> {
    /// Creates a progress observer that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Returns the writer, or the first write error.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error encountered while writing events.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.writer),
        }
    }
}

impl<W, E, A> Observer<E, A> for Progress<W>
where
    W: io::Write,
    E: Display,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }
        match writeln!(self.writer, "{event}") {
            Ok(()) => None,
            Err(error) => {
                self.error = Some(error);
                Some(A::stop_early())
            }
        }
    }
}

/// Allows `&mut Progress<W>` to be passed to solvers that take an observer
/// by value, so [`Progress::finish`] can be called after the solve completes.
impl<W, E, A> Observer<E, A> for &mut Progress<W>
where
    W: io::Write,
    E: Display,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
