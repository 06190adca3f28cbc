use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use engine::TransactionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    RequestEntry(TransactionKind),
    Cancel,
    NextField,
    Submit,
    Backspace,
    Up,
    Down,
    Input(char),
    None,
}

/// Maps a key press to an action. While the entry form is open printable
/// keys go to the focused field; `F1`/`F2` act like the footer buttons in
/// both modes.
pub fn map_key(key: KeyEvent, drafting: bool) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && let KeyCode::Char('c') = key.code
    {
        return AppAction::Quit;
    }

    match key.code {
        KeyCode::F(1) => return AppAction::RequestEntry(TransactionKind::In),
        KeyCode::F(2) => return AppAction::RequestEntry(TransactionKind::Out),
        _ => {}
    }

    if drafting {
        return match key.code {
            KeyCode::Esc => AppAction::Cancel,
            KeyCode::Tab | KeyCode::BackTab => AppAction::NextField,
            KeyCode::Enter => AppAction::Submit,
            KeyCode::Backspace => AppAction::Backspace,
            KeyCode::Char(ch) => AppAction::Input(ch),
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => AppAction::Quit,
        KeyCode::Char('i' | 'I' | '+') => AppAction::RequestEntry(TransactionKind::In),
        KeyCode::Char('o' | 'O' | '-') => AppAction::RequestEntry(TransactionKind::Out),
        KeyCode::Up | KeyCode::Char('k') => AppAction::Up,
        KeyCode::Down | KeyCode::Char('j') => AppAction::Down,
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn idle_keys_open_entries_and_quit() {
        assert_eq!(
            map_key(key(KeyCode::Char('i')), false),
            AppAction::RequestEntry(TransactionKind::In)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('-')), false),
            AppAction::RequestEntry(TransactionKind::Out)
        );
        assert_eq!(map_key(key(KeyCode::Char('q')), false), AppAction::Quit);
        assert_eq!(map_key(key(KeyCode::Enter), false), AppAction::None);
    }

    #[test]
    fn drafting_keys_edit_the_form() {
        assert_eq!(map_key(key(KeyCode::Char('q')), true), AppAction::Input('q'));
        assert_eq!(map_key(key(KeyCode::Char('i')), true), AppAction::Input('i'));
        assert_eq!(map_key(key(KeyCode::Enter), true), AppAction::Submit);
        assert_eq!(map_key(key(KeyCode::Esc), true), AppAction::Cancel);
        assert_eq!(map_key(key(KeyCode::Tab), true), AppAction::NextField);
    }

    #[test]
    fn function_keys_work_in_both_modes() {
        for drafting in [false, true] {
            assert_eq!(
                map_key(key(KeyCode::F(2)), drafting),
                AppAction::RequestEntry(TransactionKind::Out)
            );
        }
    }

    #[test]
    fn ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, true), AppAction::Quit);
        assert_eq!(map_key(ctrl_c, false), AppAction::Quit);
    }
}
