//! End-to-end popup sessions against an in-memory editor.

mod common;

use common::{MemHost, MemPane};
use tipbox_core::cursor::{Cursor, Loc};
use tipbox_core::event::{Event, KeyCode};
use tipbox_popup::{PopupConfig, TooltipController};
use tipbox_render::buffer::Buffer;
use tipbox_widgets::BoxStyle;

fn host_with(lines: &[&str], cursor: Cursor) -> MemHost {
    MemHost {
        pane: MemPane {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            cursor,
            top: 0,
            gutter: None,
        },
    }
}

#[test]
fn completion_picker_inserts_and_closes() {
    let mut host = host_with(&["let x = ;"], Cursor::new(Loc::new(0, 8), 8));
    let mut tips = TooltipController::new();
    tips.choice(["foo()", "bar()", "baz()"]).unwrap();

    let mut buf = Buffer::new(20, 6);
    let area = tips.render(&host, &mut buf).unwrap();
    assert_eq!((area.x, area.y), (8, 1));
    assert_eq!(buf.row_text(2), "        │[X] foo()│ ");

    assert_eq!(tips.intercept(Event::key(KeyCode::Down), &mut host), None);
    let mut buf = Buffer::new(20, 6);
    tips.render(&host, &mut buf);
    assert_eq!(buf.row_text(3), "        │[X] bar()│ ");

    let enter = Event::key(KeyCode::Enter);
    assert_eq!(tips.intercept(enter.clone(), &mut host), Some(enter));
    assert_eq!(host.pane.lines[0], "let x = bar();");

    assert_eq!(tips.intercept(Event::key(KeyCode::Escape), &mut host), None);
    assert!(!tips.is_active());
    assert!(tips.render(&host, &mut buf).is_none());
}

#[test]
fn hover_message_above_cursor_then_typing_dismisses() {
    let mut host = host_with(&[], Cursor::at(8, 2));
    let mut tips = TooltipController::with_config(PopupConfig::new().box_style(BoxStyle::Regular));
    tips.message(["fn len(&self) -> usize", "\n", "Returns the length."]);

    let mut buf = Buffer::new(30, 10);
    let area = tips.render(&host, &mut buf).unwrap();
    assert_eq!((area.x, area.y, area.width, area.height), (2, 4, 24, 4));
    assert_eq!(buf.row_text(4), "  ┌──────────────────────┐    ");
    assert_eq!(buf.row_text(6), "  │Returns the length.   │    ");

    let typed = Event::key(KeyCode::Char('x'));
    assert_eq!(tips.intercept(typed.clone(), &mut host), Some(typed));
    assert!(!tips.is_active());
}

#[test]
fn env_config_drives_controller() {
    let config = PopupConfig::from_env_with(|key| match key {
        "TIPBOX_CLOSE_ON_ENTER" => Some("on".to_string()),
        "TIPBOX_BOX_STYLE" => Some("double".to_string()),
        _ => None,
    });
    let mut host = host_with(&[""], Cursor::at(0, 0));
    let mut tips = TooltipController::with_config(config);
    tips.choice(["only]]]]other"]).unwrap();

    assert_eq!(tips.intercept(Event::key(KeyCode::Enter), &mut host), None);
    assert!(!tips.is_active());
    assert_eq!(host.pane.lines[0], "only");
}
