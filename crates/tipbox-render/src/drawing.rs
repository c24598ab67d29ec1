#![forbid(unsafe_code)]

//! Drawing primitives for the buffer.
//!
//! Helpers on top of [`Buffer::set`] for the shapes popups need: border
//! frames and single lines of text clipped or padded to an exact column
//! count. Every helper inherits the buffer's silent out-of-bounds clipping.

use crate::buffer::Buffer;
use crate::cell::Cell;
use crate::{char_width, grapheme_width};
use tipbox_core::geometry::Rect;
use unicode_segmentation::UnicodeSegmentation;

/// Characters used to draw a border around a rectangle.
///
/// Raw glyphs only; named presets live with the widgets that use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Build from the six glyphs in corner-first order.
    pub const fn new(
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
        horizontal: char,
        vertical: char,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

/// Extension trait for drawing on a [`Buffer`].
pub trait Draw {
    /// Draw `width` copies of `cell` rightwards from (x, y).
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, cell: Cell);

    /// Draw `height` copies of `cell` downwards from (x, y).
    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, cell: Cell);

    /// Draw a border on the outermost cells of `rect`.
    ///
    /// Corners take the four corner glyphs; the top and bottom rows between
    /// them take `horizontal`, the left and right columns take `vertical`.
    /// The fg/bg/attrs of `base_cell` apply to every glyph.
    fn draw_border(&mut self, rect: Rect, chars: BorderChars, base_cell: Cell);

    /// Print text from (x, y), stopping before `max_x` (exclusive).
    ///
    /// Advances by display width per grapheme. A wide grapheme that would
    /// cross `max_x` is not started. Returns the column after the last
    /// grapheme written.
    fn print_text_clipped(&mut self, x: u16, y: u16, text: &str, base_cell: Cell, max_x: u16)
    -> u16;

    /// Print text into exactly `width` columns starting at (x, y).
    ///
    /// Text longer than `width` is truncated by display columns; any columns
    /// left over are filled with spaces in `base_cell`'s style.
    fn print_text_padded(&mut self, x: u16, y: u16, text: &str, base_cell: Cell, width: u16);
}

impl Draw for Buffer {
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, cell: Cell) {
        for i in 0..width {
            self.set(x.saturating_add(i), y, cell);
        }
    }

    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, cell: Cell) {
        for i in 0..height {
            self.set(x, y.saturating_add(i), cell);
        }
    }

    fn draw_border(&mut self, rect: Rect, chars: BorderChars, base_cell: Cell) {
        if rect.is_empty() {
            return;
        }

        #[cfg(feature = "tracing")]
        if self.bounds().intersection(&rect) != rect {
            tracing::trace!(
                x = rect.x,
                y = rect.y,
                w = rect.width,
                h = rect.height,
                "border clipped to buffer"
            );
        }

        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        if rect.width > 2 {
            let h = base_cell.with_char(chars.horizontal);
            self.draw_horizontal_line(rect.left() + 1, rect.top(), rect.width - 2, h);
            if rect.height > 1 {
                self.draw_horizontal_line(rect.left() + 1, bottom, rect.width - 2, h);
            }
        }

        if rect.height > 2 {
            let v = base_cell.with_char(chars.vertical);
            self.draw_vertical_line(rect.left(), rect.top() + 1, rect.height - 2, v);
            if rect.width > 1 {
                self.draw_vertical_line(right, rect.top() + 1, rect.height - 2, v);
            }
        }

        self.set(rect.left(), rect.top(), base_cell.with_char(chars.top_left));
        if rect.width > 1 {
            self.set(right, rect.top(), base_cell.with_char(chars.top_right));
        }
        if rect.height > 1 {
            self.set(rect.left(), bottom, base_cell.with_char(chars.bottom_left));
        }
        if rect.width > 1 && rect.height > 1 {
            self.set(right, bottom, base_cell.with_char(chars.bottom_right));
        }
    }

    fn print_text_clipped(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        base_cell: Cell,
        max_x: u16,
    ) -> u16 {
        let mut cx = x;
        for grapheme in text.graphemes(true) {
            let width = grapheme_width(grapheme);
            if width == 0 {
                continue;
            }
            if cx as usize + width > max_x as usize {
                break;
            }
            let glyph = match grapheme.chars().next() {
                Some(c) if !c.is_control() && char_width(c) > 0 => c,
                _ => ' ',
            };
            self.set(cx, y, base_cell.with_char(glyph));
            // Clusters wider than their first char (VS16 emoji, "\r\n")
            // get their trailing columns blanked.
            let pad = base_cell.with_char(' ');
            for extra in char_width(glyph).min(width)..width {
                self.set(cx.saturating_add(extra as u16), y, pad);
            }
            cx = cx.saturating_add(width as u16);
        }
        cx
    }

    fn print_text_padded(&mut self, x: u16, y: u16, text: &str, base_cell: Cell, width: u16) {
        let max_x = x.saturating_add(width);
        let end = self.print_text_clipped(x, y, text, base_cell, max_x);
        let pad = base_cell.with_char(' ');
        for cx in end..max_x {
            self.set(cx, y, pad);
        }
    }
}
