//! Input handler: turns key presses into actions and rate-limits rotation.
//!
//! Terminals auto-repeat held keys. Moves are cheap to repeat, but a held rotate key
//! spins the piece uncontrollably, so rotations closer together than the cooldown are
//! dropped here before they ever reach the rules.

use crossterm::event::KeyEvent;

use crate::map::handle_key_event;
use crate::types::{Action, ROTATE_COOLDOWN_MS};

#[derive(Debug, Clone)]
pub struct InputHandler {
    rotate_cooldown_ms: u32,
    /// Time since the last accepted rotate; `None` until the first one.
    since_rotate_ms: Option<u32>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_rotate_cooldown_ms(ROTATE_COOLDOWN_MS)
    }

    pub fn with_rotate_cooldown_ms(rotate_cooldown_ms: u32) -> Self {
        Self {
            rotate_cooldown_ms,
            since_rotate_ms: None,
        }
    }

    pub fn rotate_cooldown_ms(&self) -> u32 {
        self.rotate_cooldown_ms
    }

    /// Map a key press to an action, suppressing rotations inside the cooldown.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<Action> {
        let action = handle_key_event(key)?;
        if action != Action::Rotate {
            return Some(action);
        }

        match self.since_rotate_ms {
            Some(elapsed) if elapsed < self.rotate_cooldown_ms => None,
            _ => {
                self.since_rotate_ms = Some(0);
                Some(Action::Rotate)
            }
        }
    }

    /// Advance the cooldown clock.
    pub fn update(&mut self, elapsed_ms: u32) {
        if let Some(since) = self.since_rotate_ms.as_mut() {
            *since = since.saturating_add(elapsed_ms);
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
