use std::fmt::{Debug, Formatter};
use std::io;
use std::sync::{Arc, Mutex};

use crate::TermLike;

/// A terminal that captures everything written to it.
///
/// This is just an [`Arc`] around its internal buffer, so it can be
/// freely cloned: hand one clone to a [`DrawTarget`] and keep another
/// to inspect the output afterwards. Escape sequences are captured
/// verbatim rather than interpreted.
///
/// [`DrawTarget`]: crate::DrawTarget
#[derive(Clone, Default)]
pub struct InMemoryTerm {
    buf: Arc<Mutex<String>>,
}

impl InMemoryTerm {
    pub fn new() -> InMemoryTerm {
        InMemoryTerm::default()
    }

    /// Everything written so far, escape sequences included.
    pub fn contents(&self) -> String {
        self.buf.lock().unwrap().clone()
    }

    /// The portion written after the last carriage return, i.e. the
    /// visible state of the current line.
    pub fn last_line(&self) -> String {
        let buf = self.buf.lock().unwrap();
        match buf.rfind('\r') {
            Some(idx) => buf[idx + 1..].to_string(),
            None => buf.clone(),
        }
    }
}

impl Debug for InMemoryTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTerm").finish()
    }
}

impl TermLike for InMemoryTerm {
    fn write_str(&self, s: &str) -> io::Result<()> {
        self.buf.lock().unwrap().push_str(s);
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_writes_verbatim() {
        let term = InMemoryTerm::new();
        term.write_str("\x1b[?25l\r[##] 10%").unwrap();
        assert_eq!(term.contents(), "\x1b[?25l\r[##] 10%");
    }

    #[test]
    fn last_line_follows_carriage_returns() {
        let term = InMemoryTerm::new();
        term.write_str("\r[#---] 25%").unwrap();
        term.write_str("\r[##--] 50%").unwrap();
        assert_eq!(term.last_line(), "[##--] 50%");
    }

    #[test]
    fn clones_share_the_buffer() {
        let term = InMemoryTerm::new();
        let clone = term.clone();
        term.write_str("abc").unwrap();
        assert_eq!(clone.contents(), "abc");
    }
}
