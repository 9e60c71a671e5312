use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::game_state::GameState;
use crate::pieces::{Piece, MAX_SHAPE_DIM};
use crate::types::{Color, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Cell coordinates of one piece (at most a full 4x4 shape)
pub type PieceCells = ArrayVec<(i32, i32), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    /// Grid coordinates for the active piece, shape offsets for the next piece.
    pub cells: PieceCells,
}

impl PieceSnapshot {
    fn at(piece: &Piece, x: i32, y: i32) -> Self {
        Self {
            kind: piece.kind,
            color: piece.color,
            cells: piece.cells().map(|(dx, dy)| (x + dx, y + dy)).collect(),
        }
    }
}

/// Everything a renderer reads, flattened into plain data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameSnapshot {
    /// Colour codes (`Color::code`), 0 for empty.
    pub grid: [[u8; GRID_WIDTH]; GRID_HEIGHT],
    pub active: PieceSnapshot,
    pub piece_x: i32,
    pub piece_y: i32,
    pub ghost_y: i32,
    pub next: PieceSnapshot,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
    pub game_ended: bool,
    pub seed: u32,
}

impl GameSnapshot {
    /// Active piece cells shifted to the ghost row.
    pub fn ghost_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let dy = self.ghost_y - self.piece_y;
        self.active.cells.iter().map(move |&(x, y)| (x, y + dy))
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let mut grid = [[0u8; GRID_WIDTH]; GRID_HEIGHT];
        for (y, row) in grid.iter_mut().enumerate() {
            if let Some(cells) = state.grid().row(y) {
                for (out, cell) in row.iter_mut().zip(cells) {
                    *out = cell.map(|c| c.code()).unwrap_or(0);
                }
            }
        }

        Self {
            grid,
            active: PieceSnapshot::at(state.active_piece(), state.piece_x(), state.piece_y()),
            piece_x: state.piece_x(),
            piece_y: state.piece_y(),
            ghost_y: state.ghost_y(),
            next: PieceSnapshot::at(state.next_piece(), 0, 0),
            score: state.score(),
            level: state.level(),
            high_score: state.high_score(),
            game_ended: state.game_ended(),
            seed: state.rng().seed(),
        }
    }
}
