//! Pieces module - piece shapes, the fixed catalog, and rotation with wall kicks
//!
//! Shapes are small occupancy matrices (at most 4x4). Rotation produces a new matrix;
//! nothing here ever mutates a shape in place.
//!
//! The wall-kick search uses one offset list for every piece and every orientation.
//! It is a deliberately simple system, not SRS.

use crate::rng::PseudoRandomStream;
use crate::types::{Color, PieceKind};

/// Largest row or column count a shape can have
pub const MAX_SHAPE_DIM: usize = 4;

/// Offsets tried in order when a rotation collides at the current position
pub const KICK_OFFSETS: [(i32, i32); 5] = [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)];

/// Rectangular occupancy matrix of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    filled: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a row-major matrix of 0/1 flags.
    ///
    /// Any non-zero entry counts as filled. Panics (at compile time when used in a
    /// `const`) if the matrix is larger than [`MAX_SHAPE_DIM`] in either direction.
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R <= MAX_SHAPE_DIM && C <= MAX_SHAPE_DIM);
        let mut filled = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                filled[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            filled,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at (`row`, `col`) is filled; out-of-range cells are empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.filled[row][col]
    }

    /// Offsets `(dx, dy)` of every filled cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.cols())
                .filter(move |&col| self.filled[row][col])
                .map(move |col| (col as i32, row as i32))
        })
    }

    /// Rotate 90° clockwise
    ///
    /// For an `R x C` matrix the result is `C x R` with `new[i][j] = old[R-1-j][i]`.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.rows();
        let cols = self.cols();
        let mut filled = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, new_row) in filled.iter_mut().enumerate().take(cols) {
            for (j, cell) in new_row.iter_mut().enumerate().take(rows) {
                *cell = self.filled[rows - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            filled,
        }
    }
}

/// A piece: shape plus the colour it leaves in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

impl Piece {
    /// Same piece with its shape rotated 90° clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Offsets of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.cells()
    }
}

const CATALOG: [Piece; 7] = [
    Piece {
        kind: PieceKind::I,
        shape: Shape::from_matrix([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Cyan,
    },
    Piece {
        kind: PieceKind::O,
        shape: Shape::from_matrix([[1, 1], [1, 1]]),
        color: Color::Yellow,
    },
    Piece {
        kind: PieceKind::T,
        shape: Shape::from_matrix([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        color: Color::Purple,
    },
    Piece {
        kind: PieceKind::J,
        shape: Shape::from_matrix([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        color: Color::Blue,
    },
    Piece {
        kind: PieceKind::L,
        shape: Shape::from_matrix([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        color: Color::Orange,
    },
    Piece {
        kind: PieceKind::S,
        shape: Shape::from_matrix([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        color: Color::Green,
    },
    Piece {
        kind: PieceKind::Z,
        shape: Shape::from_matrix([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        color: Color::Red,
    },
];

/// The seven canonical pieces, indexed by selector
pub fn catalog() -> &'static [Piece; 7] {
    &CATALOG
}

/// Canonical piece of the given kind
pub fn piece(kind: PieceKind) -> Piece {
    let index = PieceKind::ALL
        .iter()
        .position(|&k| k == kind)
        .unwrap_or_default();
    CATALOG[index]
}

/// Draw the piece selected by `stream` and return it with the advanced stream
pub fn draw_piece(stream: PseudoRandomStream) -> (Piece, PseudoRandomStream) {
    (CATALOG[stream.value()], stream.advance())
}

/// Try to rotate a piece with wall kicks
///
/// `collides(piece, x, y)` reports whether `piece` placed at `(x, y)` overlaps a wall,
/// the floor, or a filled cell. Returns the rotated piece and the accepted offset, or
/// `None` if every offset collides.
pub fn try_rotate(
    piece: &Piece,
    x: i32,
    y: i32,
    collides: impl Fn(&Piece, i32, i32) -> bool,
) -> Option<(Piece, (i32, i32))> {
    let rotated = piece.rotated();

    KICK_OFFSETS
        .iter()
        .copied()
        .find(|&(dx, dy)| !collides(&rotated, x + dx, y + dy))
        .map(|offset| (rotated, offset))
}
