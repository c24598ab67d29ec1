#![forbid(unsafe_code)]

//! Bordered text box with content-driven sizing and cursor-anchored placement.
//!
//! A [`SubWindow`] is a plain value: outer size (border included), the text
//! lines drawn inside the border, and a [`BoxStyle`]. Popups build a fresh one
//! every frame and throw it away after drawing.
//!
//! # Sizing
//!
//! | constructor                | width                      | height          |
//! |----------------------------|----------------------------|-----------------|
//! | [`SubWindow::conform_lines`] | widest line + 2          | line count + 2  |
//! | [`SubWindow::from_str_sized`] | given                   | given           |
//! | [`SubWindow::conform_str`] | widest run (see below) + 2 | 3 + newlines    |
//!
//! Widths are display columns, so `中` counts 2 and a combining accent 0.
//!
//! # Placement
//!
//! [`SubWindow::tooltip_origin`] puts the box directly above the cursor row
//! when it fits, and one row below the cursor otherwise.

use tipbox_core::cursor::{Cursor, ViewPort};
use tipbox_core::geometry::Rect;
use tipbox_render::buffer::Buffer;
use tipbox_render::cell::Cell;
use tipbox_render::drawing::Draw;
use tipbox_render::{char_width, display_width};

use crate::box_style::BoxStyle;

/// Columns and rows taken by the border on each axis.
const FRAME: usize = 2;

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// A bordered box of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubWindow {
    width: u16,
    height: u16,
    lines: Vec<String>,
    style: BoxStyle,
}

impl SubWindow {
    /// Size the box to fit `lines` exactly.
    ///
    /// `style` falls back to [`BoxStyle::default`] when `None`.
    pub fn conform_lines<I, S>(style: Option<BoxStyle>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let widest = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        Self {
            width: clamp_u16(widest + FRAME),
            height: clamp_u16(lines.len() + FRAME),
            lines,
            style: style.unwrap_or_default(),
        }
    }

    /// Box of a caller-chosen size holding `msg` split on `\n`.
    pub fn from_str_sized(width: u16, height: u16, msg: &str, style: Option<BoxStyle>) -> Self {
        Self {
            width,
            height,
            lines: msg.split('\n').map(str::to_owned).collect(),
            style: style.unwrap_or_default(),
        }
    }

    /// Size the box from a single string.
    ///
    /// The running width resets at each `\n` and the newline itself then
    /// counts one column toward the line it starts. Height starts at 3 and
    /// grows by one per newline, so `"ab"` yields 4x3 and `"ab\ncd"` 5x4.
    pub fn conform_str(msg: &str, style: Option<BoxStyle>) -> Self {
        let mut run = 0usize;
        let mut widest = 0usize;
        let mut height = 3usize;

        for c in msg.chars() {
            if c == '\n' {
                height += 1;
                run = 0;
            }
            run += char_width(c);
            widest = widest.max(run);
        }

        Self::from_str_sized(clamp_u16(widest + FRAME), clamp_u16(height), msg, style)
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[inline]
    pub const fn style(&self) -> BoxStyle {
        self.style
    }

    /// Outer rectangle when drawn with its top-left corner at (x, y).
    pub const fn area(&self, x: u16, y: u16) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }

    /// Draw the border and content with the top-left corner at (x, y).
    ///
    /// Every cell written takes the colors and attributes of `base`. Each
    /// content line is padded or truncated to `width - 2` columns; lines
    /// beyond `height - 2` are not drawn. Anything outside `buf` is dropped.
    pub fn render(&self, x: u16, y: u16, buf: &mut Buffer, base: Cell) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "SubWindow",
            x = x,
            y = y,
            w = self.width,
            h = self.height
        )
        .entered();

        let area = self.area(x, y);
        if area.is_empty() {
            return;
        }

        buf.draw_border(area, self.style.chars(), base);

        let inner = area.inner();
        for (row, line) in (inner.top()..inner.bottom()).zip(&self.lines) {
            buf.print_text_padded(inner.left(), row, line, base, inner.width);
        }
    }

    /// Top-left corner for drawing this box as a tooltip of `cursor`.
    ///
    /// The column is the cursor's visual column plus the gutter width. The
    /// box sits with its bottom edge on the row above the cursor when
    /// `row - height >= 0`, and starts on the row below the cursor otherwise.
    /// Rows above the view clamp to 0.
    pub fn tooltip_origin(&self, view: &ViewPort, cursor: &Cursor) -> (u16, u16) {
        let x = cursor.visual_x + usize::from(view.gutter_width.unwrap_or(0));
        let row = cursor.view_row(view);
        let height = i64::from(self.height);

        let y = if row - height < 0 { row + 1 } else { row - height };

        (clamp_u16(x), u16::try_from(y.max(0)).unwrap_or(u16::MAX))
    }

    /// Draw at [`tooltip_origin`](Self::tooltip_origin) and return the area
    /// covered.
    pub fn place_as_tooltip(
        &self,
        view: &ViewPort,
        cursor: &Cursor,
        buf: &mut Buffer,
        base: Cell,
    ) -> Rect {
        let (x, y) = self.tooltip_origin(view, cursor);
        self.render(x, y, buf, base);
        self.area(x, y)
    }
}
