//! Output sinks.
//!
//! A [`View`] receives each command's fully assembled text in a single call.
//! Nothing is streamed; a command either writes once or not at all.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Arc;

/// A sink that receives finished command output.
pub trait View {
    /// Accept one complete piece of output.
    fn write(&self, text: &str) -> io::Result<()>;
}

impl<T: View + ?Sized> View for &T {
    fn write(&self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }
}

impl<T: View + ?Sized> View for Box<T> {
    fn write(&self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }
}

impl<T: View + ?Sized> View for Rc<T> {
    fn write(&self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }
}

impl<T: View + ?Sized> View for Arc<T> {
    fn write(&self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }
}

/// Writes output verbatim to an [`io::Write`] destination and flushes it.
pub struct WriterView<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> WriterView<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    /// Consume the view and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterView<io::Stdout> {
    /// A view over standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> View for WriterView<W> {
    fn write(&self, text: &str) -> io::Result<()> {
        let mut writer = self.writer.borrow_mut();
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

/// Collects every write in memory, in order.
#[derive(Debug, Default)]
pub struct BufferView {
    writes: RefCell<Vec<String>>,
}

impl BufferView {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes received so far.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// The writes concatenated into one string.
    pub fn contents(&self) -> String {
        self.writes.borrow().concat()
    }

    /// Drop everything collected so far.
    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
    }
}

impl View for BufferView {
    fn write(&self, text: &str) -> io::Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}
