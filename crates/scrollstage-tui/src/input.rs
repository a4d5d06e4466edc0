use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::stage::Stage;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    /// Rebuild the page at its initial state
    Reset,
    /// Wheel delta in pixels, positive scrolls down
    Wheel(f64),
    /// Pointer pressed at x (pixels)
    PointerDown(f64),
    /// Pointer moved to x (pixels)
    PointerMove(f64),
    PointerUp,
    None,
}

/// Handle a key event and return the corresponding action
///
/// `line_px` is the wheel step for a single line, `page_px` for a full page.
pub fn handle_key_event(key: KeyEvent, line_px: f64, page_px: f64) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reset,

        // Line scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::Wheel(line_px),
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::Wheel(-line_px),
        (KeyCode::Down, _) => Action::Wheel(line_px),
        (KeyCode::Up, _) => Action::Wheel(-line_px),

        // Page scrolling
        (KeyCode::PageDown, _) => Action::Wheel(page_px),
        (KeyCode::PageUp, _) => Action::Wheel(-page_px),
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Wheel(page_px),
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::Wheel(page_px),
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::Wheel(-page_px),

        _ => Action::None,
    }
}

/// Handle a mouse event: left button drags the carousel, the wheel scrolls
pub fn handle_mouse_event(mouse: MouseEvent, stage: &Stage, line_px: f64) -> Action {
    let x = stage.column_px(mouse.column);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown(x),
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerMove(x),
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp,
        MouseEventKind::ScrollDown => Action::Wheel(line_px),
        MouseEventKind::ScrollUp => Action::Wheel(-line_px),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use scrollstage_core::config::PageConfig;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), 100.0, 640.0), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), 100.0, 640.0), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE), 100.0, 640.0), Action::Wheel(100.0));
        assert_eq!(handle_key_event(key(KeyCode::Up, KeyModifiers::NONE), 100.0, 640.0), Action::Wheel(-100.0));
        assert_eq!(handle_key_event(key(KeyCode::PageDown, KeyModifiers::NONE), 100.0, 640.0), Action::Wheel(640.0));
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE), 100.0, 640.0), Action::None);
    }

    #[test]
    fn test_mouse_maps_columns_to_pixels() {
        let stage = Stage::new(PageConfig::default(), 100, 40);
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10), &stage, 100.0),
            Action::PointerDown(80.0)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 4), &stage, 100.0),
            Action::PointerMove(32.0)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 4), &stage, 100.0),
            Action::PointerUp
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 0), &stage, 100.0),
            Action::Wheel(100.0)
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 0), &stage, 100.0),
            Action::None
        );
    }
}
