//! Terminal front-end for blockfall.
//!
//! [`GameView`] turns a `GameSnapshot` into a [`FrameBuffer`]; [`TerminalRenderer`]
//! flushes frames to the terminal through crossterm, redrawing only what changed. The
//! rules crate never sees any of this.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
