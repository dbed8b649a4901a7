//! Mouse filtering from terminal events to click positions.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Extract a click position from a mouse event.
///
/// A click is the release of the left button; presses, drags, movement, and
/// scrolling are ignored. Returns the screen cell `(column, row)`; callers
/// translate that into the board's display space.
pub fn pointer_click(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Up(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_release_is_a_click() {
        let event = mouse(MouseEventKind::Up(MouseButton::Left), 12, 5);
        assert_eq!(pointer_click(event), Some((12, 5)));
    }

    #[test]
    fn test_left_press_is_not_a_click() {
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 12, 5);
        assert_eq!(pointer_click(event), None);
    }

    #[test]
    fn test_other_buttons_ignored() {
        assert_eq!(
            pointer_click(mouse(MouseEventKind::Up(MouseButton::Right), 3, 3)),
            None
        );
        assert_eq!(
            pointer_click(mouse(MouseEventKind::Up(MouseButton::Middle), 3, 3)),
            None
        );
    }

    #[test]
    fn test_motion_and_scroll_ignored() {
        assert_eq!(pointer_click(mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(pointer_click(mouse(MouseEventKind::ScrollDown, 1, 1)), None);
        assert_eq!(
            pointer_click(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1)),
            None
        );
    }
}
