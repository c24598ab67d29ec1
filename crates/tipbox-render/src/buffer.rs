#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is the screen grid popups draw into. Hosts render their panes
//! first, then let the tooltip controller draw on top, then flush the buffer
//! to the terminal.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Writes outside the grid are dropped silently
//! 4. A wide glyph is written whole or not at all; its trailing columns hold
//!    [`Cell::CONTINUATION`]

use crate::cell::Cell;
use tipbox_core::geometry::Rect;

/// A 2D grid of terminal cells, stored row-major.
///
/// # Example
///
/// ```
/// use tipbox_render::buffer::Buffer;
/// use tipbox_render::cell::Cell;
///
/// let mut buffer = Buffer::new(80, 24);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// assert_eq!(buffer.row_text(0).trim_end(), "Hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer filled with default (empty) cells.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
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
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding rect of the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if self.bounds().contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Clear any wide glyph that currently covers `(x, y)` so a new write
    /// does not leave half a glyph behind.
    fn cleanup_overlap(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else { return };
        let current = self.cells[idx];

        if current.content.width() > 1 {
            for i in 1..current.content.width() as u16 {
                if let Some(tail) = self.index(x.saturating_add(i), y)
                    && self.cells[tail].is_continuation()
                {
                    self.cells[tail] = Cell::default();
                }
            }
        } else if current.is_continuation() {
            let mut back_x = x;
            while back_x > 0 {
                back_x -= 1;
                let Some(head_idx) = self.index(back_x, y) else { break };
                let head = self.cells[head_idx];
                if head.is_continuation() {
                    continue;
                }
                let width = head.content.width();
                if back_x as usize + width > x as usize {
                    self.cells[head_idx] = Cell::default();
                    for i in 1..width as u16 {
                        if let Some(tail) = self.index(back_x + i, y)
                            && self.cells[tail].is_continuation()
                        {
                            self.cells[tail] = Cell::default();
                        }
                    }
                }
                break;
            }
        }
    }

    /// Set the cell at (x, y).
    ///
    /// Out-of-bounds writes are ignored. Wide glyphs that would not fit
    /// entirely inside the grid are not written at all; when they fit, the
    /// trailing columns are filled with [`Cell::CONTINUATION`].
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let width = cell.content.width().max(1) as u16;
        if y >= self.height || x >= self.width || x.saturating_add(width) > self.width {
            return;
        }

        for i in 0..width {
            self.cleanup_overlap(x + i, y);
        }

        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
        for i in 1..width {
            if let Some(idx) = self.index(x + i, y) {
                self.cells[idx] = Cell::CONTINUATION;
            }
        }
    }

    /// Fill a rectangular region with the given cell.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = self.bounds().intersection(&rect);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The characters of row `y` as a string.
    ///
    /// Empty cells read as spaces and continuation cells are skipped, so a
    /// row holding `中` followed by `a` reads `"中a"`. Returns an empty string
    /// for rows outside the grid.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.is_continuation())
            .map(|cell| cell.content.as_char().unwrap_or(' '))
            .collect()
    }
}
