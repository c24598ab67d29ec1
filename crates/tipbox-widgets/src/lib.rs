#![forbid(unsafe_code)]

//! Box styles and the bordered text window popups are drawn with.

pub mod box_style;
pub mod subwindow;

pub use box_style::{BoxStyle, ParseBoxStyleError};
pub use subwindow::SubWindow;
