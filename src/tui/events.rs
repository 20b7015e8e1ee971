use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::share::ShareTarget;

/// User actions from keyboard and mouse events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    /// Start the session, release the current drag, or restart from the results
    Confirm,
    NudgeLeft,
    NudgeRight,
    FlingLeft,
    FlingRight,
    /// Snap the card back to center
    Cancel,
    Restart,
    Share(ShareTarget),
    PointerDown { column: u16, row: u16 },
    PointerDrag { column: u16 },
    PointerUp { column: u16 },
    Resize,
    None,
}

/// Poll for terminal events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::None);
    }
    let action = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_action(key),
        Event::Mouse(mouse) => mouse_to_action(mouse),
        Event::Resize(_, _) => Action::Resize,
        _ => Action::None,
    };
    Ok(action)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,

        // Dragging (arrows or vim keys)
        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => Action::NudgeLeft,
        (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NudgeRight,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::FlingLeft,
        (KeyCode::Char('y'), KeyModifiers::NONE) => Action::FlingRight,
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => Action::Confirm,
        (KeyCode::Esc, _) => Action::Cancel,

        // Session
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Restart,

        // Share
        (KeyCode::Char('x'), KeyModifiers::NONE) => Action::Share(ShareTarget::X),
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::Share(ShareTarget::LinkedIn),
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::Share(ShareTarget::Facebook),
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::Share(ShareTarget::Native),

        _ => Action::None,
    }
}

fn mouse_to_action(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Action::PointerDown { column: mouse.column, row: mouse.row }
        }
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag { column: mouse.column },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp { column: mouse.column },
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_quit_actions() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c), Action::Quit);

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(key_to_action(q), Action::Quit);
    }

    #[test]
    fn test_nudge_arrows_and_vim_keys() {
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(key_to_action(left), Action::NudgeLeft);

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(key_to_action(right), Action::NudgeRight);

        let h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE);
        assert_eq!(key_to_action(h), Action::NudgeLeft);

        let l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(key_to_action(l), Action::NudgeRight);
    }

    #[test]
    fn test_fling_keys() {
        let y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        assert_eq!(key_to_action(y), Action::FlingRight);

        let n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(key_to_action(n), Action::FlingLeft);
    }

    #[test]
    fn test_confirm_and_cancel() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_to_action(enter), Action::Confirm);

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key_to_action(space), Action::Confirm);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(key_to_action(esc), Action::Cancel);
    }

    #[test]
    fn test_share_and_restart_keys() {
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(key_to_action(x), Action::Share(ShareTarget::X));

        let i = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(key_to_action(i), Action::Share(ShareTarget::LinkedIn));

        let f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
        assert_eq!(key_to_action(f), Action::Share(ShareTarget::Facebook));

        let s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(key_to_action(s), Action::Share(ShareTarget::Native));

        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(key_to_action(r), Action::Restart);
    }

    #[test]
    fn test_modified_letters_are_ignored() {
        let ctrl_y = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_y), Action::None);
    }

    #[test]
    fn test_unknown_key() {
        let unknown = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(key_to_action(unknown), Action::None);
    }

    #[test]
    fn test_mouse_left_button_gesture() {
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 10, 5);
        assert_eq!(mouse_to_action(down), Action::PointerDown { column: 10, row: 5 });

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 14, 6);
        assert_eq!(mouse_to_action(drag), Action::PointerDrag { column: 14 });

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 20, 6);
        assert_eq!(mouse_to_action(up), Action::PointerUp { column: 20 });
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let right = mouse(MouseEventKind::Down(MouseButton::Right), 1, 1);
        assert_eq!(mouse_to_action(right), Action::None);

        let scroll = mouse(MouseEventKind::ScrollDown, 1, 1);
        assert_eq!(mouse_to_action(scroll), Action::None);
    }
}
