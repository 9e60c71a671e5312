//! Action scripts: one action per line, `#` starts a comment.
//!
//! ```text
//! # drop an I bar into the left corner
//! rotate
//! move x -4
//! drop
//! down
//! ```

use anyhow::{bail, Result};

use crate::types::Action;

/// Parse a whole script, reporting the first bad line by number.
pub fn parse_script(text: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        match Action::from_str(line) {
            Some(action) => actions.push(action),
            None => bail!("line {}: unknown action `{}`", i + 1, line),
        }
    }
    Ok(actions)
}
