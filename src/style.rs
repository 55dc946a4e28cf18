use std::fmt::Write;

use console::Style;

/// Controls how a frame of the loading bar is rendered.
#[derive(Clone, Debug)]
pub struct BarStyle {
    fill_char: char,
    space_char: char,
    fill_style: Style,
    emphasis_style: Style,
    colored: bool,
}

impl Default for BarStyle {
    fn default() -> BarStyle {
        BarStyle::default_bar()
    }
}

impl BarStyle {
    /// The classic `#`/`-` bar with a green fill.
    ///
    /// Styling is forced so the emitted frame bytes are the same
    /// whether or not the output is a terminal.
    pub fn default_bar() -> BarStyle {
        BarStyle {
            fill_char: '#',
            space_char: '-',
            fill_style: Style::new().green().force_styling(true),
            emphasis_style: Style::new().green().force_styling(true),
            colored: true,
        }
    }

    /// A style with all coloring disabled.
    pub fn plain() -> BarStyle {
        BarStyle {
            colored: false,
            ..BarStyle::default_bar()
        }
    }

    /// Sets the fill and remainder characters.
    pub fn progress_chars(mut self, fill: char, space: char) -> BarStyle {
        self.fill_char = fill;
        self.space_char = space;
        self
    }

    /// Filled width of a `size`-character bar at `pct` percent.
    pub(crate) fn filled_width(pct: u8, size: usize) -> usize {
        size * usize::from(pct.min(100)) / 100
    }

    /// Renders one frame: `[####------] 40%`.
    ///
    /// The fill segment carries the fill color; the percentage text is
    /// emphasized only once it reads 100. The bracket and remainder
    /// are deliberately left unstyled.
    pub fn frame(&self, pct: u8, size: usize) -> String {
        let pct = pct.min(100);
        let filled = Self::filled_width(pct, size);

        let fill: String = std::iter::repeat(self.fill_char).take(filled).collect();
        let space: String = std::iter::repeat(self.space_char)
            .take(size - filled)
            .collect();

        let mut buf = String::with_capacity(size + 16);
        buf.push('[');
        if self.colored {
            write!(buf, "{}", self.fill_style.apply_to(&fill)).unwrap();
        } else {
            buf.push_str(&fill);
        }
        buf.push_str(&space);
        buf.push_str("] ");
        if self.colored && pct == 100 {
            write!(buf, "{}", self.emphasis_style.apply_to(format!("{pct}%"))).unwrap();
        } else {
            write!(buf, "{pct}%").unwrap();
        }
        buf
    }
}
