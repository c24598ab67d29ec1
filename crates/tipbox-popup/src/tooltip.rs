#![forbid(unsafe_code)]

//! The single-slot popup controller.
//!
//! # State machine
//!
//! ```text
//!              message / choice / open
//!   Inactive ─────────────────────────▶ Active ◀─┐ intercept: keep
//!      ▲                                  │  │   │ message / choice / open
//!      └──────────────────────────────────┘  └───┘
//!          intercept: close, or dismiss
//! ```
//!
//! The controller is active exactly when it holds a popup, so "active with no
//! popup" cannot be represented. Opening a popup while another is active
//! drops the old one.

use std::fmt::Display;

use tipbox_core::event::Event;
use tipbox_core::geometry::Rect;
use tipbox_render::buffer::Buffer;

use crate::config::PopupConfig;
use crate::error::PopupError;
use crate::host::EditorHost;
use crate::popup::{ChoicePopup, MessagePopup, Popup};

/// Holds at most one popup and filters input through it.
#[derive(Debug, Default)]
pub struct TooltipController {
    current: Option<Box<dyn Popup>>,
    config: PopupConfig,
}

impl TooltipController {
    /// Inactive controller with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inactive controller with `config`.
    pub fn with_config(config: PopupConfig) -> Self {
        Self {
            current: None,
            config,
        }
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// The active popup, if any.
    pub fn current(&self) -> Option<&dyn Popup> {
        self.current.as_deref()
    }

    /// Show a message built from `parts`, replacing any active popup.
    pub fn message<I>(&mut self, parts: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.open(Box::new(MessagePopup::from_parts(parts)));
    }

    /// Show a picker built from `parts`, replacing any active popup.
    ///
    /// Fails with [`PopupError::EmptyChoices`] when `parts` yields no
    /// choices; the controller is left as it was.
    pub fn choice<I>(&mut self, parts: I) -> Result<(), PopupError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let popup = match ChoicePopup::from_parts(parts) {
            Ok(popup) => popup.with_close_on_enter(self.config.close_choice_on_enter),
            Err(err) => {
                tipbox_core::warn!(error = %err, "choice popup rejected");
                return Err(err);
            }
        };
        self.open(Box::new(popup));
        Ok(())
    }

    /// Make `popup` the active popup.
    pub fn open(&mut self, popup: Box<dyn Popup>) {
        tipbox_core::debug!(
            kind = popup.kind(),
            replaced = self.current.is_some(),
            "popup opened"
        );
        self.current = Some(popup);
    }

    /// Drop the active popup, if any.
    pub fn dismiss(&mut self) {
        if let Some(_popup) = self.current.take() {
            tipbox_core::debug!(kind = _popup.kind(), reason = "dismiss", "popup closed");
        }
    }

    /// Draw the active popup near the cursor. Returns the area drawn, or
    /// `None` when inactive.
    pub fn render(&self, host: &dyn EditorHost, buf: &mut Buffer) -> Option<Rect> {
        let popup = self.current.as_deref()?;
        Some(popup.render(host, self.config.box_style, buf))
    }

    /// Route `event` through the active popup.
    ///
    /// Inactive: returns `Some(event)` untouched. Active: the popup decides
    /// whether to close and what to forward; `None` means the event was
    /// consumed.
    pub fn intercept(&mut self, event: Event, host: &mut dyn EditorHost) -> Option<Event> {
        let Some(popup) = self.current.as_mut() else {
            return Some(event);
        };

        let outcome = popup.handle_event(event, host);
        if outcome.close {
            tipbox_core::debug!(
                kind = popup.kind(),
                reason = "input",
                forwarded = outcome.forward.is_some(),
                "popup closed"
            );
            self.current = None;
        }
        outcome.forward
    }
}
