//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game. It has **no dependencies**
//! on terminals, timers, or input devices, which makes it:
//!
//! - **Deterministic**: the same seed and the same action sequence always produce the
//!   same states
//! - **Immutable**: every transition returns a new [`GameState`]; old states stay valid
//! - **Total**: no action on a well-formed state can fail
//!
//! # Module Structure
//!
//! - [`rng`]: LCG stream producing piece selectors
//! - [`pieces`]: shapes, the fixed piece catalog, rotation with wall kicks
//! - [`grid`]: 10x20 playfield with collision, burn and line clearing
//! - [`scoring`]: score, level and high score
//! - [`action`]: the transition function over [`types::Action`]
//! - [`game_state`]: the state aggregate and its factory
//! - [`snapshot`]: plain read-only copy of a state for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::Action;
//!
//! let game = GameState::new(12345);
//!
//! let game = game.apply(Action::RIGHT);
//! let game = game.apply(Action::Rotate);
//! let game = game.apply(Action::Drop);
//!
//! assert!(game.piece_y() > 0);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The rules know nothing about time. A driver emits `Action::DOWN` on every gravity tick
//! and chooses the tick interval from [`GameState::level`].

pub mod action;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use action::{apply, replay};
pub use game_state::GameState;
pub use grid::Grid;
pub use pieces::{catalog, draw_piece, piece, try_rotate, Piece, Shape, KICK_OFFSETS};
pub use rng::PseudoRandomStream;
pub use scoring::{level_for_score, ScoreUpdate};
pub use snapshot::{GameSnapshot, PieceSnapshot};
