#![forbid(unsafe_code)]

//! Cursor and viewport coordinates exchanged with the host editor.
//!
//! A cursor has two faces: a buffer [`Loc`] used for text edits and a
//! visual column used for placement on screen. The two diverge as soon as a
//! line contains tabs or wide glyphs, so hosts report both.

/// A position in the host's text buffer (line and character index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Loc {
    pub line: usize,
    pub column: usize,
}

impl Loc {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The text cursor of the focused pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Where an insertion at the cursor lands.
    pub loc: Loc,
    /// Display column of the cursor within the pane's text area.
    pub visual_x: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(loc: Loc, visual_x: usize) -> Self {
        Self { loc, visual_x }
    }

    /// Cursor whose visual column equals its character column.
    #[must_use]
    pub const fn at(line: usize, column: usize) -> Self {
        Self::new(Loc::new(line, column), column)
    }

    /// Row of the cursor relative to the first visible line of `view`.
    ///
    /// Negative when the cursor has scrolled above the view.
    #[must_use]
    pub fn view_row(&self, view: &ViewPort) -> i64 {
        self.loc.line as i64 - view.top_line as i64
    }
}

/// What part of the buffer a pane currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewPort {
    /// First buffer line visible in the pane.
    pub top_line: usize,
    /// Width of the line-number/diagnostic gutter, for panes that draw one.
    pub gutter_width: Option<u16>,
}

impl ViewPort {
    #[must_use]
    pub const fn new(top_line: usize) -> Self {
        Self {
            top_line,
            gutter_width: None,
        }
    }

    #[must_use]
    pub const fn with_gutter(mut self, width: u16) -> Self {
        self.gutter_width = Some(width);
        self
    }
}
