use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::io::{self, Write};

/// Progress echo, stdout by default.
///
/// Every template line, tag attempt, comment and written cue line goes
/// through here. Logging goes to stderr through `tracing` instead.
///
/// A failed write (a closed pipe, typically) turns the echo off for the rest
/// of the run; it never aborts the run.
pub struct Console {
    out: Option<RefCell<Box<dyn Write>>>,
    broken: Cell<bool>,
}

impl Console {
    pub fn new(echo: bool) -> Self {
        if echo {
            Self::to_writer(io::stdout())
        } else {
            Self {
                out: None,
                broken: Cell::new(false),
            }
        }
    }

    pub fn to_writer(out: impl Write + 'static) -> Self {
        Self {
            out: Some(RefCell::new(Box::new(out))),
            broken: Cell::new(false),
        }
    }

    /// A console that drops everything.
    #[cfg(test)]
    pub fn silent() -> Self {
        Self::new(false)
    }

    pub fn line(&self, text: impl Display) {
        let Some(out) = &self.out else {
            return;
        };
        if self.broken.get() {
            return;
        }

        let mut out = out.borrow_mut();
        if let Err(err) = writeln!(out, "{text}") {
            self.broken.set(true);
            if err.kind() == io::ErrorKind::BrokenPipe {
                tracing::debug!("console closed, echo disabled");
            } else {
                tracing::warn!(error = %err, "console write failed, echo disabled");
            }
        }
    }
}

/// Shared in-memory sink for asserting on console output.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct Captured(std::rc::Rc<RefCell<Vec<u8>>>);

#[cfg(test)]
impl Captured {
    pub fn console(&self) -> Console {
        Console::to_writer(self.clone())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

#[cfg(test)]
impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fails every write like stdout piped into a reader that has exited.
/// Counts the attempts.
#[cfg(test)]
pub struct ClosedPipe(pub std::rc::Rc<Cell<usize>>);

#[cfg(test)]
impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.0.set(self.0.get() + 1);
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
