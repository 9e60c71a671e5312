//! Key bindings.
//!
//! | keys                    | action           |
//! |-------------------------|------------------|
//! | `←` `h` `a`             | move left        |
//! | `→` `l` `d`             | move right       |
//! | `↓` `j` `s`             | move down        |
//! | `↑` `k` `w`             | rotate clockwise |
//! | space                   | drop             |
//! | `r`                     | restart          |
//! | `q`, Ctrl-C             | quit (driver)    |
//!
//! Letters match in either case.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action bound to `key`, if any.
///
/// Chords with Ctrl or Alt are never game input.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let action = match key.code {
        KeyCode::Left => Action::LEFT,
        KeyCode::Right => Action::RIGHT,
        KeyCode::Down => Action::DOWN,
        KeyCode::Up => Action::Rotate,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' | 'a' => Action::LEFT,
            'l' | 'd' => Action::RIGHT,
            'j' | 's' => Action::DOWN,
            'k' | 'w' => Action::Rotate,
            ' ' => Action::Drop,
            'r' => Action::Restart,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// `q`, `Q` or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
