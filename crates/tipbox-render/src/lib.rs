#![forbid(unsafe_code)]

//! Render kernel: cells, the buffer grid, and drawing primitives.

pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod text_width;

pub use text_width::{char_width, display_width, grapheme_width};
