#![forbid(unsafe_code)]

//! Popup variants.
//!
//! A [`Popup`] lays itself out as a [`SubWindow`] and decides, for each input
//! event, whether it should close and which event (if any) the host should
//! still dispatch. Two variants exist:
//!
//! - [`MessagePopup`]: read-only text. Closes on any non-mouse input and
//!   forwards that input.
//! - [`ChoicePopup`]: a picker. Up/Down move the selection, Enter inserts the
//!   selected text at the cursor, Escape closes.

use std::fmt::{self, Display, Write as _};

use tipbox_core::event::{Event, KeyCode};
use tipbox_core::geometry::Rect;
use tipbox_render::buffer::Buffer;
use tipbox_widgets::{BoxStyle, SubWindow};

use crate::error::PopupError;
use crate::host::EditorHost;

/// Separator that packs many choices into a single argument.
pub const CHOICE_DELIMITER: &str = "]]]]";

const SELECTED_MARK: &str = "[X] ";
const UNSELECTED_MARK: &str = "[ ] ";

/// What a popup decided about one input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupOutcome {
    /// Whether the popup should be dismissed.
    pub close: bool,
    /// Event for the host to dispatch normally; `None` swallows it.
    pub forward: Option<Event>,
}

impl PopupOutcome {
    /// Stay open.
    pub const fn keep(forward: Option<Event>) -> Self {
        Self {
            close: false,
            forward,
        }
    }

    /// Close.
    pub const fn close(forward: Option<Event>) -> Self {
        Self {
            close: true,
            forward,
        }
    }
}

/// A popup the controller can hold.
pub trait Popup: fmt::Debug {
    /// Short name used in logs.
    fn kind(&self) -> &'static str;

    /// The box this popup draws, in `style`.
    fn layout(&self, style: BoxStyle) -> SubWindow;

    /// Draw anchored to the active pane's cursor and return the area covered.
    fn render(&self, host: &dyn EditorHost, style: BoxStyle, buf: &mut Buffer) -> Rect {
        let pane = host.active_pane();
        self.layout(style)
            .place_as_tooltip(&pane.view(), &pane.cursor(), buf, host.default_cell())
    }

    fn handle_event(&mut self, event: Event, host: &mut dyn EditorHost) -> PopupOutcome;
}

fn concat<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for part in parts {
        // Writing into a String cannot fail.
        let _ = write!(out, "{part}");
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// Message
// ═══════════════════════════════════════════════════════════════════════════

/// Read-only text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePopup {
    lines: Vec<String>,
}

impl MessagePopup {
    /// Concatenate `parts` and split the result on `\n`.
    ///
    /// Empty input gives a single empty line.
    pub fn from_parts<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let text = concat(parts);
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Popup for MessagePopup {
    fn kind(&self) -> &'static str {
        "message"
    }

    fn layout(&self, style: BoxStyle) -> SubWindow {
        SubWindow::conform_lines(Some(style), self.lines.iter().cloned())
    }

    fn handle_event(&mut self, event: Event, _host: &mut dyn EditorHost) -> PopupOutcome {
        if event.is_mouse() {
            PopupOutcome::keep(Some(event))
        } else {
            PopupOutcome::close(Some(event))
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Choice
// ═══════════════════════════════════════════════════════════════════════════

/// A list of choices with one selected.
///
/// Never empty; `selected` is always a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoicePopup {
    choices: Vec<String>,
    selected: usize,
    close_on_enter: bool,
}

impl ChoicePopup {
    /// Picker over `choices`, first entry selected.
    pub fn new(choices: Vec<String>) -> Result<Self, PopupError> {
        if choices.is_empty() {
            return Err(PopupError::EmptyChoices);
        }
        Ok(Self {
            choices,
            selected: 0,
            close_on_enter: false,
        })
    }

    /// Build the choice list from display values.
    ///
    /// A single part is split on [`CHOICE_DELIMITER`]. Several parts are each
    /// split on `\n` and the lines appended in order.
    pub fn from_parts<I>(parts: I) -> Result<Self, PopupError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let parts: Vec<String> = parts.into_iter().map(|p| p.to_string()).collect();
        let choices = match parts.as_slice() {
            [single] => single.split(CHOICE_DELIMITER).map(str::to_owned).collect(),
            many => many
                .iter()
                .flat_map(|part| part.split('\n'))
                .map(str::to_owned)
                .collect(),
        };
        Self::new(choices)
    }

    /// Close after Enter instead of staying open.
    #[must_use]
    pub fn with_close_on_enter(mut self, close: bool) -> Self {
        self.close_on_enter = close;
        self
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_text(&self) -> &str {
        &self.choices[self.selected]
    }

    /// Move the selection by `delta`, wrapping at both ends.
    fn step(&mut self, delta: i64) {
        let n = self.choices.len() as i64;
        self.selected = (self.selected as i64 + delta).rem_euclid(n) as usize;
        tipbox_core::trace!(selected = self.selected, "choice selection moved");
    }

    fn decorated_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.choices.iter().enumerate().map(|(i, choice)| {
            let mark = if i == self.selected {
                SELECTED_MARK
            } else {
                UNSELECTED_MARK
            };
            format!("{mark}{choice}")
        })
    }
}

impl Popup for ChoicePopup {
    fn kind(&self) -> &'static str {
        "choice"
    }

    fn layout(&self, style: BoxStyle) -> SubWindow {
        SubWindow::conform_lines(Some(style), self.decorated_lines())
    }

    fn handle_event(&mut self, event: Event, host: &mut dyn EditorHost) -> PopupOutcome {
        let key = match event.as_key() {
            Some(key) => *key,
            None => return PopupOutcome::close(Some(event)),
        };
        if !key.is_down() {
            return PopupOutcome::keep(Some(event));
        }

        match key.code {
            KeyCode::Up => {
                self.step(-1);
                PopupOutcome::keep(None)
            }
            KeyCode::Down => {
                self.step(1);
                PopupOutcome::keep(None)
            }
            KeyCode::Escape => PopupOutcome::close(None),
            KeyCode::Enter => {
                let pane = host.active_pane_mut();
                let loc = pane.cursor().loc;
                pane.insert_at(loc, self.selected_text());
                if self.close_on_enter {
                    PopupOutcome::close(None)
                } else {
                    PopupOutcome::keep(Some(event))
                }
            }
            _ => PopupOutcome::keep(Some(event)),
        }
    }
}
