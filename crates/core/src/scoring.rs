//! Scoring module - score, level and high score after a landing
//!
//! Every cleared row is worth a flat `POINTS_PER_LINE`; the level is derived from the
//! score alone (one level per `POINTS_PER_LEVEL` points, starting at 1).

use crate::types::{POINTS_PER_LEVEL, POINTS_PER_LINE, STARTING_LEVEL};

/// Score bookkeeping after a landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreUpdate {
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
}

/// Level for a given score: `floor(score / 1000) + 1`
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + STARTING_LEVEL
}

/// Fold `cleared` rows into the running score
pub fn update(score: u32, high_score: u32, cleared: usize) -> ScoreUpdate {
    let gained = POINTS_PER_LINE.saturating_mul(cleared as u32);
    let score = score.saturating_add(gained);

    ScoreUpdate {
        score,
        level: level_for_score(score),
        high_score: score.max(high_score),
    }
}
