//! Byte sinks the renderer writes into.
//!
//! A sink receives the final bytes in issue order and may report the
//! terminal size for renderers without a fixed window.

use std::io::{self, Write};

/// Destination for rendered bytes.
pub trait Sink {
    /// Write all of `bytes`, blocking until the sink accepts them.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Flush buffered bytes.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Finish the stream. Nothing is written afterwards.
    fn end(&mut self) -> io::Result<()> {
        self.flush()
    }

    /// Current number of columns, if known.
    fn columns(&self) -> Option<usize> {
        None
    }

    /// Current number of rows, if known.
    fn rows(&self) -> Option<usize> {
        None
    }

    /// Whether the sink is an interactive terminal.
    fn is_tty(&self) -> bool {
        false
    }
}

/// In-memory sink, handy for capturing output.
impl Sink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn end(&mut self) -> io::Result<()> {
        (**self).end()
    }

    fn columns(&self) -> Option<usize> {
        (**self).columns()
    }

    fn rows(&self) -> Option<usize> {
        (**self).rows()
    }

    fn is_tty(&self) -> bool {
        (**self).is_tty()
    }
}

/// Standard output, sized live from the controlling terminal.
#[derive(Debug)]
pub struct StdoutSink {
    stdout: io::Stdout,
    is_tty: bool,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            is_tty: atty::is(atty::Stream::Stdout),
        }
    }

    fn size(&self) -> Option<(usize, usize)> {
        if !self.is_tty {
            return None;
        }
        terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), terminal_size::Height(h))| (w as usize, h as usize))
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for StdoutSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.stdout.lock().write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.lock().flush()
    }

    fn columns(&self) -> Option<usize> {
        self.size().map(|(w, _)| w)
    }

    fn rows(&self) -> Option<usize> {
        self.size().map(|(_, h)| h)
    }

    fn is_tty(&self) -> bool {
        self.is_tty
    }
}

/// Any [`Write`] implementation as a sink, with an optional fixed size.
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: W,
    size: Option<(usize, usize)>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, size: None }
    }

    /// Report `columns` x `rows` to the renderer.
    pub fn with_size(mut self, columns: usize, rows: usize) -> Self {
        self.size = Some((columns, rows));
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    fn columns(&self) -> Option<usize> {
        self.size.map(|(w, _)| w)
    }

    fn rows(&self) -> Option<usize> {
        self.size.map(|(_, h)| h)
    }
}
