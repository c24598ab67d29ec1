#![forbid(unsafe_code)]

//! tipbox public facade crate.
//!
//! Re-exports the types a host editor needs to show cursor-anchored popups:
//! the event model, the cell buffer, box styles, and the tooltip controller.

// --- Core re-exports -------------------------------------------------------

pub use tipbox_core::cursor::{Cursor, Loc, ViewPort};
pub use tipbox_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use tipbox_core::geometry::Rect;

// --- Render re-exports -----------------------------------------------------

pub use tipbox_render::buffer::Buffer;
pub use tipbox_render::cell::{Cell, PackedRgba, StyleFlags};
pub use tipbox_render::drawing::{BorderChars, Draw};

// --- Widget re-exports -----------------------------------------------------

pub use tipbox_widgets::{BoxStyle, ParseBoxStyleError, SubWindow};

// --- Popup re-exports ------------------------------------------------------

pub use tipbox_popup::{
    ChoicePopup, EditorHost, EditorPane, MessagePopup, Popup, PopupConfig, PopupError,
    PopupOutcome, TooltipController,
};

/// Standard result type for tipbox APIs.
pub type Result<T> = std::result::Result<T, PopupError>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoxStyle, Buffer, Cell, Cursor, EditorHost, EditorPane, Event, KeyCode, Loc, PopupConfig,
        PopupError, Result, TooltipController, ViewPort,
    };

    pub use crate::{core, popup, render, widgets};
}

pub use tipbox_core as core;
pub use tipbox_popup as popup;
pub use tipbox_render as render;
pub use tipbox_widgets as widgets;
