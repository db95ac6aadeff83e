//! Output sinks that a [`Console`](crate::Console) can write to.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A closable output target.
///
/// A sink is closed exactly once, when a redirect scope ends. Closing
/// an already closed sink returns an error, as does writing to it.
pub trait OutputSink: Write + Send {
    /// Flush and release the sink.
    fn close(&mut self) -> io::Result<()>;

    /// Whether [`close`](OutputSink::close) has been called.
    fn is_closed(&self) -> bool;
}

fn closed_error() -> io::Error {
    io::Error::other("output sink is closed")
}

/// The process's standard output.
#[derive(Debug)]
pub struct StdoutSink {
    stdout: io::Stdout,
    closed: bool,
}

impl StdoutSink {
    /// Sink writing to `std::io::stdout()`.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            closed: false,
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(closed_error());
        }
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl OutputSink for StdoutSink {
    // Only flushes: the process stdout handle stays usable by others.
    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        self.closed = true;
        self.stdout.flush()
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Discards everything written to it.
#[derive(Debug, Default)]
pub struct NullSink {
    closed: bool,
}

impl NullSink {
    /// Create an open null sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Write for NullSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(closed_error());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputSink for NullSink {
    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Err(closed_error());
        }
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[derive(Debug, Default)]
struct CaptureState {
    buf: Vec<u8>,
    closed: bool,
}

/// In-memory sink.
///
/// Clones share the same buffer, so keep a clone as a handle to read the
/// captured output and check [`is_closed`](OutputSink::is_closed) after
/// the sink itself has been moved into a redirect.
///
/// # Examples
///
/// ```
/// use obskit_io::{CaptureSink, Console, OutputSink};
/// use std::io::Write;
///
/// let capture = CaptureSink::new();
/// let mut console = Console::new(obskit_io::NullSink::new());
/// {
///     let mut scope = console.redirect(capture.clone());
///     write!(scope, "hello").unwrap();
/// }
/// assert_eq!(capture.contents(), "hello");
/// assert!(capture.is_closed());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    state: Arc<Mutex<CaptureState>>,
}

impl CaptureSink {
    /// Create an empty, open capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut CaptureState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *state)
    }

    /// Captured bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.with_state(|s| s.buf.clone())
    }

    /// Captured output as text (invalid UTF-8 is replaced).
    pub fn contents(&self) -> String {
        self.with_state(|s| String::from_utf8_lossy(&s.buf).into_owned())
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_state(|s| {
            if s.closed {
                return Err(closed_error());
            }
            s.buf.extend_from_slice(buf);
            Ok(buf.len())
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputSink for CaptureSink {
    fn close(&mut self) -> io::Result<()> {
        self.with_state(|s| {
            if s.closed {
                return Err(closed_error());
            }
            s.closed = true;
            Ok(())
        })
    }

    fn is_closed(&self) -> bool {
        self.with_state(|s| s.closed)
    }
}

/// Adapts any writer (a file, a socket, a `Vec<u8>`) into a sink.
///
/// Closing flushes the writer and drops it, releasing the underlying
/// handle.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    inner: Option<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner: Some(inner) }
    }

    /// The wrapped writer, or `None` once closed.
    pub fn get_ref(&self) -> Option<&W> {
        self.inner.as_ref()
    }

    fn open(&mut self) -> io::Result<&mut W> {
        self.inner.as_mut().ok_or_else(closed_error)
    }
}

impl<W: Write + Send> Write for WriterSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.open()?.flush()
    }
}

impl<W: Write + Send> OutputSink for WriterSink<W> {
    fn close(&mut self) -> io::Result<()> {
        let mut inner = self.inner.take().ok_or_else(closed_error)?;
        inner.flush()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}
