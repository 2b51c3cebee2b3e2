//! Keybinding definitions for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::navigation::Panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Esc: closes the clear dialog when open, quits otherwise.
    Cancel,
    Navigate(Panel),
    NextField,
    PrevField,
    /// Enter: submits whichever form owns the focused field.
    Submit,
    Input(char),
    Backspace,
    Refresh,
    Clear,
    MoveUp,
    MoveDown,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('d') => Some(Action::Clear),
            _ => None,
        };
    }

    match code {
        KeyCode::F(1) => Some(Action::Navigate(Panel::Scan)),
        KeyCode::F(2) => Some(Action::Navigate(Panel::Database)),
        KeyCode::F(3) => Some(Action::Navigate(Panel::About)),
        KeyCode::F(5) => Some(Action::Refresh),
        KeyCode::Tab => Some(Action::NextField),
        KeyCode::BackTab => Some(Action::PrevField),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}
