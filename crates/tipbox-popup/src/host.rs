#![forbid(unsafe_code)]

//! What the popup layer needs from the host editor.
//!
//! Popups never own editor state. They read the focused pane's cursor and
//! view when drawing, and a choice popup writes its selection back through
//! [`EditorPane::insert_at`].

use tipbox_core::cursor::{Cursor, Loc, ViewPort};
use tipbox_render::cell::Cell;

/// The focused editing pane.
pub trait EditorPane {
    fn cursor(&self) -> Cursor;

    fn view(&self) -> ViewPort;

    /// Insert `text` into the pane's buffer at `loc`.
    fn insert_at(&mut self, loc: Loc, text: &str);
}

/// The host editor as seen by popups.
pub trait EditorHost {
    fn active_pane(&self) -> &dyn EditorPane;

    fn active_pane_mut(&mut self) -> &mut dyn EditorPane;

    /// Style applied to popup borders and text.
    fn default_cell(&self) -> Cell {
        Cell::from_char(' ')
    }
}
