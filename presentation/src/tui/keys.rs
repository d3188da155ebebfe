//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    /// Open the highlighted theme or poll, or vote for the highlighted option
    Activate,
    Back,
    /// Vote for an option position
    Vote(usize),
    Refresh,
    /// Open the create-poll form
    NewPoll,
    Quit,
    Ignore,
}

/// What a key press does while the create-poll form is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Input(char),
    Backspace,
    NextField,
    PreviousField,
    /// Next field, or submit on the last one
    Confirm,
    Cancel,
    Ignore,
}

/// Map a key event to an action.
///
/// In the voting view `1`-`9` and `A`-`Z` (shifted) vote directly.
pub fn map_key(key: KeyEvent, voting: bool) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => KeyAction::Activate,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => KeyAction::Back,
        KeyCode::Char('r') => KeyAction::Refresh,
        KeyCode::Char('n') => KeyAction::NewPoll,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char(c @ '1'..='9') if voting => KeyAction::Vote(c as usize - '1' as usize),
        KeyCode::Char(c @ 'A'..='Z') if voting => KeyAction::Vote(c as usize - 'A' as usize),
        _ => KeyAction::Ignore,
    }
}

/// Map a key event while the create-poll form has focus
pub fn map_form_key(key: KeyEvent) -> FormAction {
    if key.kind == KeyEventKind::Release {
        return FormAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => FormAction::Cancel,
            _ => FormAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Esc => FormAction::Cancel,
        KeyCode::Enter => FormAction::Confirm,
        KeyCode::Tab | KeyCode::Down => FormAction::NextField,
        KeyCode::BackTab | KeyCode::Up => FormAction::PreviousField,
        KeyCode::Backspace => FormAction::Backspace,
        KeyCode::Char(c) => FormAction::Input(c),
        _ => FormAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Down), false), KeyAction::Down);
        assert_eq!(map_key(press(KeyCode::Char('k')), false), KeyAction::Up);
        assert_eq!(map_key(press(KeyCode::Enter), false), KeyAction::Activate);
        assert_eq!(map_key(press(KeyCode::Esc), true), KeyAction::Back);
        assert_eq!(map_key(press(KeyCode::Char('q')), false), KeyAction::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), false),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_vote_shortcuts_only_while_voting() {
        assert_eq!(map_key(press(KeyCode::Char('1')), true), KeyAction::Vote(0));
        assert_eq!(map_key(press(KeyCode::Char('3')), true), KeyAction::Vote(2));
        assert_eq!(map_key(press(KeyCode::Char('B')), true), KeyAction::Vote(1));
        assert_eq!(map_key(press(KeyCode::Char('1')), false), KeyAction::Ignore);
        assert_eq!(map_key(press(KeyCode::Char('0')), true), KeyAction::Ignore);
    }

    #[test]
    fn test_form_keys_capture_text() {
        assert_eq!(map_key(press(KeyCode::Char('n')), false), KeyAction::NewPoll);
        assert_eq!(map_form_key(press(KeyCode::Char('q'))), FormAction::Input('q'));
        assert_eq!(map_form_key(press(KeyCode::Char('j'))), FormAction::Input('j'));
        assert_eq!(map_form_key(press(KeyCode::Tab)), FormAction::NextField);
        assert_eq!(map_form_key(press(KeyCode::BackTab)), FormAction::PreviousField);
        assert_eq!(map_form_key(press(KeyCode::Enter)), FormAction::Confirm);
        assert_eq!(map_form_key(press(KeyCode::Esc)), FormAction::Cancel);
    }
}
