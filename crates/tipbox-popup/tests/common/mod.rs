//! Shared fixtures: an in-memory editor host and event strategies.

#![allow(dead_code)]

use proptest::prelude::*;
use tipbox_core::cursor::{Cursor, Loc, ViewPort};
use tipbox_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tipbox_popup::{EditorHost, EditorPane};

/// A pane backed by a vector of lines.
#[derive(Debug, Default)]
pub struct MemPane {
    pub lines: Vec<String>,
    pub cursor: Cursor,
    pub top: usize,
    pub gutter: Option<u16>,
}

impl EditorPane for MemPane {
    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn view(&self) -> ViewPort {
        ViewPort {
            top_line: self.top,
            gutter_width: self.gutter,
        }
    }

    fn insert_at(&mut self, loc: Loc, text: &str) {
        while self.lines.len() <= loc.line {
            self.lines.push(String::new());
        }
        let line = &mut self.lines[loc.line];
        let at = line
            .char_indices()
            .nth(loc.column)
            .map_or(line.len(), |(i, _)| i);
        line.insert_str(at, text);
    }
}

#[derive(Debug, Default)]
pub struct MemHost {
    pub pane: MemPane,
}

impl EditorHost for MemHost {
    fn active_pane(&self) -> &dyn EditorPane {
        &self.pane
    }

    fn active_pane_mut(&mut self) -> &mut dyn EditorPane {
        &mut self.pane
    }
}

pub fn key_code() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Tab),
        Just(KeyCode::Enter),
        Just(KeyCode::Escape),
        Just(KeyCode::Backspace),
        Just(KeyCode::Home),
        Just(KeyCode::Other),
        (1u8..=12).prop_map(KeyCode::F),
        prop::char::range('a', 'z').prop_map(KeyCode::Char),
    ]
}

pub fn key_kind() -> impl Strategy<Value = KeyEventKind> {
    prop_oneof![
        4 => Just(KeyEventKind::Press),
        1 => Just(KeyEventKind::Repeat),
        1 => Just(KeyEventKind::Release),
    ]
}

pub fn mouse_kind() -> impl Strategy<Value = MouseEventKind> {
    prop_oneof![
        Just(MouseEventKind::Down(MouseButton::Left)),
        Just(MouseEventKind::Up(MouseButton::Right)),
        Just(MouseEventKind::Drag(MouseButton::Middle)),
        Just(MouseEventKind::Moved),
        Just(MouseEventKind::ScrollUp),
        Just(MouseEventKind::ScrollDown),
    ]
}

/// Any event the host might dispatch.
pub fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (key_code(), key_kind(), any::<bool>()).prop_map(|(code, kind, ctrl)| {
            let mods = if ctrl { Modifiers::CTRL } else { Modifiers::NONE };
            Event::Key(KeyEvent::new(code).with_kind(kind).with_modifiers(mods))
        }),
        (mouse_kind(), 0u16..200, 0u16..60)
            .prop_map(|(kind, x, y)| Event::Mouse(MouseEvent::new(kind, x, y))),
        (1u16..300, 1u16..100).prop_map(|(width, height)| Event::Resize { width, height }),
        "[a-z ]{0,8}".prop_map(Event::Paste),
        any::<bool>().prop_map(Event::Focus),
        Just(Event::Tick),
    ]
}

/// Up or Down presses.
pub fn arrow() -> impl Strategy<Value = Event> {
    prop_oneof![Just(Event::key(KeyCode::Up)), Just(Event::key(KeyCode::Down))]
}
