//! Game state module - the immutable aggregate every action is folded over
//!
//! A `GameState` is a value. Actions never mutate it; [`GameState::apply`] returns the
//! next state and leaves the previous one intact, so drivers can keep history, replay,
//! or compare states freely.

use crate::grid::Grid;
use crate::pieces::{draw_piece, Piece};
use crate::rng::PseudoRandomStream;
use crate::scoring::level_for_score;
use crate::snapshot::GameSnapshot;
use crate::types::{Action, GRID_HEIGHT, SPAWN_X, STARTING_LEVEL};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) active_piece: Piece,
    pub(crate) next_piece: Piece,
    pub(crate) piece_x: i32,
    pub(crate) piece_y: i32,
    pub(crate) grid: Grid,
    pub(crate) rng: PseudoRandomStream,
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) high_score: u32,
    pub(crate) game_ended: bool,
}

impl GameState {
    /// Create a new game from an explicit seed
    pub fn new(seed: u32) -> Self {
        Self::new_game(PseudoRandomStream::new(seed))
    }

    /// Create a new game seeded from the wall clock
    pub fn with_clock_seed() -> Self {
        Self::new_game(PseudoRandomStream::from_clock())
    }

    /// Create a new game drawing the active and next piece from `stream`
    ///
    /// The first draw advances `stream` once, the second draw advances that result
    /// again; the state keeps the twice-advanced stream for future draws.
    pub fn new_game(stream: PseudoRandomStream) -> Self {
        let (active_piece, stream) = draw_piece(stream);
        let (next_piece, stream) = draw_piece(stream);

        Self {
            active_piece,
            next_piece,
            piece_x: SPAWN_X,
            piece_y: 0,
            grid: Grid::new(),
            rng: stream,
            score: 0,
            level: STARTING_LEVEL,
            high_score: 0,
            game_ended: false,
        }
    }

    /// Apply one action and return the resulting state
    pub fn apply(&self, action: Action) -> GameState {
        crate::action::apply(action, self)
    }

    pub fn active_piece(&self) -> &Piece {
        &self.active_piece
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next_piece
    }

    pub fn piece_x(&self) -> i32 {
        self.piece_x
    }

    pub fn piece_y(&self) -> i32 {
        self.piece_y
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rng(&self) -> PseudoRandomStream {
        self.rng
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_ended(&self) -> bool {
        self.game_ended
    }

    /// Row the active piece would come to rest on if dropped now
    pub fn ghost_y(&self) -> i32 {
        resting_y(&self.grid, &self.active_piece, self.piece_x, self.piece_y)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    // Scenario setup. These return modified copies and are meant for tests, custom
    // starting boards, and tools; regular play only goes through `apply`.

    pub fn with_grid(self, grid: Grid) -> Self {
        Self { grid, ..self }
    }

    pub fn with_position(self, piece_x: i32, piece_y: i32) -> Self {
        Self {
            piece_x,
            piece_y,
            ..self
        }
    }

    pub fn with_active_piece(self, active_piece: Piece) -> Self {
        Self {
            active_piece,
            ..self
        }
    }

    pub fn with_next_piece(self, next_piece: Piece) -> Self {
        Self { next_piece, ..self }
    }

    /// Set the score; level follows it and the high score never drops below it
    pub fn with_score(self, score: u32, high_score: u32) -> Self {
        Self {
            score,
            level: level_for_score(score),
            high_score: high_score.max(score),
            ..self
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game(PseudoRandomStream::default())
    }
}

/// Lowest `y >= start_y` at which `piece` still fits, walking down one row at a time
///
/// Returns `start_y` when the next row down already collides. The walk is bounded by
/// the grid height, so a piece with no filled cells cannot loop forever.
pub(crate) fn resting_y(grid: &Grid, piece: &Piece, x: i32, start_y: i32) -> i32 {
    let mut y = start_y;
    while y < GRID_HEIGHT as i32 && !grid.collides(piece, x, y + 1) {
        y += 1;
    }
    y
}
