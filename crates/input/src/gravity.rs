//! Gravity scheduler: decides when a driver should emit a downward move.
//!
//! Elapsed time accumulates across calls. When the level changes only the interval is
//! re-read; the accumulator is kept, so a retime neither replays nor loses a tick that
//! was already pending.

use crate::types::{BASE_TICK_MS, MIN_TICK_MS, STARTING_LEVEL, TICK_DECREMENT_MS};

/// Gravity interval for a level.
pub fn tick_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(STARTING_LEVEL);
    BASE_TICK_MS
        .saturating_sub(steps.saturating_mul(TICK_DECREMENT_MS))
        .max(MIN_TICK_MS)
}

#[derive(Debug, Clone, Default)]
pub struct Gravity {
    accumulator_ms: u32,
}

impl Gravity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` and return how many gravity ticks are now due at `level`.
    pub fn update(&mut self, elapsed_ms: u32, level: u32) -> u32 {
        let interval = tick_interval_ms(level);
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);

        let due = self.accumulator_ms / interval;
        self.accumulator_ms %= interval;
        due
    }

    /// Forget pending time (new game).
    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }

    pub fn pending_ms(&self) -> u32 {
        self.accumulator_ms
    }
}
