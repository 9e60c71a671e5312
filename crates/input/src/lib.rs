//! Terminal input module (driver-facing).
//!
//! This module is independent of any UI framework beyond crossterm's key events. It maps
//! keys to [`crate::types::Action`], rate-limits rotation, and schedules gravity ticks
//! from the current level. None of it is part of the rules: the core only ever sees the
//! resulting actions.

pub mod gravity;
pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use gravity::{tick_interval_ms, Gravity};
pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
