#![forbid(unsafe_code)]

//! Popups anchored to the editor cursor.
//!
//! The [`TooltipController`] holds at most one active [`Popup`] and sits in
//! front of the host's input dispatch: every event goes through
//! [`TooltipController::intercept`] first, and whatever it returns continues
//! to the focused pane.
//!
//! ```
//! use tipbox_core::event::{Event, KeyCode};
//! use tipbox_popup::TooltipController;
//!
//! struct NoHost;
//! # impl tipbox_popup::EditorHost for NoHost {
//! #     fn active_pane(&self) -> &dyn tipbox_popup::EditorPane { unimplemented!() }
//! #     fn active_pane_mut(&mut self) -> &mut dyn tipbox_popup::EditorPane { unimplemented!() }
//! # }
//!
//! let mut tips = TooltipController::new();
//! let mut host = NoHost;
//!
//! // Inactive: events pass straight through.
//! let key = Event::key(KeyCode::Char('x'));
//! assert_eq!(tips.intercept(key.clone(), &mut host), Some(key.clone()));
//!
//! // A message popup closes on the next key and still forwards it.
//! tips.message(["fn main()", "\n", "entry point"]);
//! assert!(tips.is_active());
//! assert_eq!(tips.intercept(key.clone(), &mut host), Some(key));
//! assert!(!tips.is_active());
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod popup;
pub mod tooltip;

pub use config::PopupConfig;
pub use error::PopupError;
pub use host::{EditorHost, EditorPane};
pub use popup::{ChoicePopup, MessagePopup, Popup, PopupOutcome};
pub use tooltip::TooltipController;
