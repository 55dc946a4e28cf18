use std::io;

use console::Term;

use crate::TermLike;

/// Target for draw operations.
///
/// This tells the renderer where to paint. Frames overwrite each other
/// in place with a carriage return while the cursor is hidden; once
/// the run ends, the target is left with colors reset, the cursor
/// visible, and the bar line terminated.
#[derive(Debug)]
pub struct DrawTarget {
    kind: TargetKind,
}

#[derive(Debug)]
enum TargetKind {
    Term(Term),
    TermLike(Box<dyn TermLike>),
    Hidden,
}

impl DrawTarget {
    /// Draw to a buffered stdout terminal.
    pub fn stdout() -> DrawTarget {
        DrawTarget {
            kind: TargetKind::Term(Term::buffered_stdout()),
        }
    }

    /// A hidden draw target. The run proceeds normally but nothing is
    /// painted.
    pub fn hidden() -> DrawTarget {
        DrawTarget {
            kind: TargetKind::Hidden,
        }
    }

    /// Draw to a custom surface, e.g. an [`InMemoryTerm`] in tests.
    ///
    /// [`InMemoryTerm`]: crate::InMemoryTerm
    pub fn term_like(term: Box<dyn TermLike>) -> DrawTarget {
        DrawTarget {
            kind: TargetKind::TermLike(term),
        }
    }

    /// Returns true if the draw target is hidden.
    pub fn is_hidden(&self) -> bool {
        matches!(self.kind, TargetKind::Hidden)
    }

    fn term(&self) -> Option<&dyn TermLike> {
        match &self.kind {
            TargetKind::Term(term) => Some(term),
            TargetKind::TermLike(term) => Some(term.as_ref()),
            TargetKind::Hidden => None,
        }
    }

    /// Paints one frame: hides the cursor, returns to the start of the
    /// line, writes the frame, and flushes.
    pub(crate) fn draw_frame(&self, frame: &str) -> io::Result<()> {
        let Some(term) = self.term() else {
            return Ok(());
        };
        term.write_str("\x1b[?25l\r")?;
        term.write_str(frame)?;
        term.flush()
    }

    /// Final cleanup once the run ends: reset colors, show the cursor,
    /// and move past the bar line.
    pub(crate) fn clear_finish(&self) -> io::Result<()> {
        let Some(term) = self.term() else {
            return Ok(());
        };
        term.write_str("\x1b[0m\x1b[?25h\n")?;
        term.flush()
    }
}
