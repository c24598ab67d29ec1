#![forbid(unsafe_code)]

//! Core: input events, cursor/view geometry, and logging.

pub mod cursor;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
