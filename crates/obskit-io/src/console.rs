//! Explicit output context with scoped redirection.
//!
//! A [`Console`] owns one output target. [`Console::redirect`] installs a
//! replacement [`OutputSink`] and returns a [`Redirect`] guard; dropping
//! the guard closes the replacement and puts the previous target back.
//! The guard mutably borrows the console, so redirects nest strictly:
//! an inner redirect is acquired through the outer guard and must end
//! first.

use crate::sink::{OutputSink, StdoutSink};
use std::fmt;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

/// An output target that can be temporarily redirected.
///
/// `Console` implements [`Write`]; everything written goes to the
/// current target.
pub struct Console {
    target: Box<dyn OutputSink>,
    depth: usize,
}

impl Console {
    /// Console writing to `sink`.
    pub fn new(sink: impl OutputSink + 'static) -> Self {
        Self {
            target: Box::new(sink),
            depth: 0,
        }
    }

    /// Console writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(StdoutSink::new())
    }

    /// Number of redirects currently active on this console.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the current target has been closed.
    pub fn is_target_closed(&self) -> bool {
        self.target.is_closed()
    }

    /// Send output to `sink` until the returned guard is dropped.
    ///
    /// When the guard ends (normal drop, early return, `?`, or panic
    /// unwinding) `sink` is closed and the previous target restored.
    /// Use [`Redirect::finish`] to observe the result of closing.
    pub fn redirect(&mut self, sink: impl OutputSink + 'static) -> Redirect<'_> {
        let sink: Box<dyn OutputSink> = Box::new(sink);
        let saved = std::mem::replace(&mut self.target, sink);
        self.depth += 1;
        tracing::debug!(depth = self.depth, "output redirect acquired");
        Redirect {
            console: self,
            saved: Some(saved),
        }
    }

    /// Run `f` with output redirected to `sink`.
    ///
    /// After `f` returns `Ok`, the sink is closed and a close failure is
    /// returned as the error. If `f` fails, its error is returned and a
    /// close failure is only logged. The previous target is restored on
    /// every path, including while a panic from `f` unwinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use obskit_io::{CaptureSink, Console, NullSink, OutputSink};
    /// use std::io::Write;
    ///
    /// let capture = CaptureSink::new();
    /// let mut console = Console::new(NullSink::new());
    /// let result: std::io::Result<u32> = console.with_redirect(capture.clone(), |out| {
    ///     writeln!(out, "inside")?;
    ///     Ok(7)
    /// });
    /// assert_eq!(result.unwrap(), 7);
    /// assert_eq!(capture.contents(), "inside\n");
    /// assert!(capture.is_closed());
    /// assert_eq!(console.depth(), 0);
    /// ```
    pub fn with_redirect<S, F, T, E>(&mut self, sink: S, f: F) -> Result<T, E>
    where
        S: OutputSink + 'static,
        F: FnOnce(&mut Console) -> Result<T, E>,
        E: From<io::Error>,
    {
        let mut scope = self.redirect(sink);
        let value = f(&mut *scope)?;
        scope.finish()?;
        Ok(value)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("depth", &self.depth)
            .field("target_closed", &self.target.is_closed())
            .finish()
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.target.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.target.flush()
    }
}

/// Guard for an active redirect. Dereferences to the [`Console`].
#[must_use = "dropping the guard immediately ends the redirect"]
pub struct Redirect<'a> {
    console: &'a mut Console,
    saved: Option<Box<dyn OutputSink>>,
}

impl Redirect<'_> {
    /// End the redirect now, returning the result of closing the sink.
    pub fn finish(mut self) -> io::Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> io::Result<()> {
        let Some(saved) = self.saved.take() else {
            return Ok(());
        };
        let mut sink = std::mem::replace(&mut self.console.target, saved);
        self.console.depth -= 1;
        tracing::debug!(depth = self.console.depth, "output redirect restored");
        sink.close()
    }
}

impl Drop for Redirect<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to close redirected output sink");
        }
    }
}

impl Deref for Redirect<'_> {
    type Target = Console;

    fn deref(&self) -> &Console {
        self.console
    }
}

impl DerefMut for Redirect<'_> {
    fn deref_mut(&mut self) -> &mut Console {
        self.console
    }
}

impl Write for Redirect<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()
    }
}
