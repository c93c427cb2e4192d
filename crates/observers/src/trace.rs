use std::{
    fmt::Display,
    io::{self, Write},
};

use rootwise_core::Observer;

/// Observer that writes each event on its own line.
///
/// Events are formatted with their [`Display`] impl. Tracing never steers
/// the solver: `observe` always returns `None`.
///
/// Write failures do not interrupt the solve. The first failure is kept,
/// later events are dropped, and [`Trace::take_error`] reports it.
#[derive(Debug)]
pub struct Trace<W> {
    writer: W,
    error: Option<io::Error>,
}

impl Trace<io::Stderr> {
    /// Creates a trace that writes to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Trace<W> {
    /// Creates a trace that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Returns the first write failure, if any, and resumes writing.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consumes the trace and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<E, A, W> Observer<E, A> for Trace<W>
where
    E: Display,
    W: Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_none() {
            if let Err(error) = writeln!(self.writer, "{event}") {
                self.error = Some(error);
            }
        }
        None
    }
}
