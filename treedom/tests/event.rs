use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
    MouseButton as CtMouseButton, MouseEvent, MouseEventKind,
};
use treedom::{translate, Event, Key, MouseButton};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn key_presses_translate_and_releases_are_dropped() {
    let press = CtEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    let release = CtEvent::Key(KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });

    let events = translate(&[press, release]);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        Event::Key {
            key: Key::Char('q'),
            ..
        }
    ));
}

#[test]
fn mouse_press_drag_release_map_to_widget_events() {
    let raw = vec![
        mouse(MouseEventKind::Down(CtMouseButton::Left), 3, 1),
        mouse(MouseEventKind::Drag(CtMouseButton::Left), 3, 4),
        mouse(MouseEventKind::Up(CtMouseButton::Left), 3, 2),
    ];

    assert_eq!(
        translate(&raw),
        vec![
            Event::Click {
                x: 3,
                y: 1,
                button: MouseButton::Left
            },
            Event::Drag {
                x: 3,
                y: 4,
                button: MouseButton::Left
            },
            Event::Release {
                x: 3,
                y: 2,
                button: MouseButton::Left
            },
        ]
    );
}

#[test]
fn hover_moves_and_scrolls_are_ignored() {
    let raw = vec![
        mouse(MouseEventKind::Moved, 1, 1),
        mouse(MouseEventKind::ScrollUp, 1, 1),
        mouse(MouseEventKind::ScrollDown, 1, 1),
    ];

    assert!(translate(&raw).is_empty());
}

#[test]
fn resize_is_passed_through() {
    let events = translate(&[CtEvent::Resize(80, 24)]);
    assert_eq!(
        events,
        vec![Event::Resize {
            width: 80,
            height: 24
        }]
    );
}

#[test]
fn modifiers_translate() {
    let press = CtEvent::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
    let events = translate(&[press]);

    match &events[0] {
        Event::Key { key, modifiers } => {
            assert_eq!(*key, Key::Char('d'));
            assert!(modifiers.ctrl);
            assert!(!modifiers.none());
        }
        other => panic!("unexpected event {other:?}"),
    }
}
