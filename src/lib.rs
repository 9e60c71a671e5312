//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as `blockfall::{core,input,term,types}`
//! so the binaries, integration tests and benches share a single import path. The
//! [`script`] module holds the action-script format used by the replay tool.

pub mod script;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
