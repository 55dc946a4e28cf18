use std::fmt::Debug;
use std::io;

use console::Term;

/// A trait for minimal terminal-like behavior.
///
/// Anything that implements this trait can be used as a draw surface
/// via [`DrawTarget::term_like`]. Escape sequences (cursor hide/show,
/// colors, carriage return) arrive through [`write_str`] as part of
/// the byte stream.
///
/// [`DrawTarget::term_like`]: crate::DrawTarget::term_like
/// [`write_str`]: TermLike::write_str
pub trait TermLike: Debug + Send + Sync {
    /// Write a string, without a trailing newline.
    fn write_str(&self, s: &str) -> io::Result<()>;

    fn flush(&self) -> io::Result<()>;
}

impl TermLike for Term {
    fn write_str(&self, s: &str) -> io::Result<()> {
        Term::write_str(self, s)
    }

    fn flush(&self) -> io::Result<()> {
        Term::flush(self)
    }
}
