//! Single-line terminal surface.
//!
//! Rewrites the current line in place: carriage return, clear line, text.

use std::cell::RefCell;
use std::io::Write;

use sitefx::host::TextSurface;

pub struct TerminalSurface<W: Write> {
    out: RefCell<W>,
    text: RefCell<String>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out: RefCell::new(out), text: RefCell::new(String::new()) }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> TextSurface for TerminalSurface<W> {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        let written = write!(out, "\r\x1b[2K{text}").and_then(|()| out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "terminal write failed");
        }
        text.clone_into(&mut self.text.borrow_mut());
    }
}
