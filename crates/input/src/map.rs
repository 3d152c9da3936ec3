//! Key mapping from terminal events to viewer actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Pause or resume automatic playback
    TogglePause,
    /// Show or hide the other seats' hands
    ToggleReveal,
    /// Move the discard cursor one tile left
    CursorLeft,
    /// Move the discard cursor one tile right
    CursorRight,
    /// Discard the tile under the cursor
    Confirm,
    /// Restart playback at the next round of the log
    NextRound,
    /// Restart playback at the previous round of the log
    PrevRound,
}

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewerAction> {
    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') => Some(ViewerAction::TogglePause),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(ViewerAction::ToggleReveal),

        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(ViewerAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(ViewerAction::CursorRight)
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(ViewerAction::Confirm),

        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::PageDown => Some(ViewerAction::NextRound),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::PageUp => Some(ViewerAction::PrevRound),

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_control_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(ViewerAction::TogglePause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('V'))),
            Some(ViewerAction::ToggleReveal)
        );
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(ViewerAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('l'))),
            Some(ViewerAction::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(ViewerAction::Confirm)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(ViewerAction::Confirm)
        );
    }

    #[test]
    fn test_round_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(ViewerAction::NextRound)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::PageUp)),
            Some(ViewerAction::PrevRound)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
