//! Grid module - the 10x20 playfield
//!
//! The grid is a flat, row-major array of cells: each cell is empty or holds the colour
//! of a burned piece. Coordinates are `(x, y)` with x in 0..10 (left to right) and
//! y in 0..20 (top to bottom).
//!
//! Operations that change cell contents (`burn`, `clear_rows`) take `&self` and return a
//! new grid; the dimensions never change.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells in the grid
const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// Row indices, at most one per grid row
pub type RowIndices = ArrayVec<usize, GRID_HEIGHT>;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * GRID_WIDTH + (x as usize))
    }

    /// Whether (x, y) lies outside `[0, width) x [0, height)`
    #[inline(always)]
    pub fn is_out_of_bounds(x: i32, y: i32) -> bool {
        x < 0 || x >= GRID_WIDTH as i32 || y < 0 || y >= GRID_HEIGHT as i32
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Cells of row `y`, or `None` past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= GRID_HEIGHT {
            return None;
        }
        let start = y * GRID_WIDTH;
        Some(&self.cells[start..start + GRID_WIDTH])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Whether any filled cell of `piece` placed at (x, y) is out of bounds or lands
    /// on an occupied cell
    pub fn collides(&self, piece: &Piece, x: i32, y: i32) -> bool {
        piece.cells().any(|(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            Self::is_out_of_bounds(px, py) || self.is_occupied(px, py)
        })
    }

    /// Copy of the grid with `piece` burned in at (x, y)
    ///
    /// Covered cells take the piece colour; cells that would fall outside the grid are
    /// skipped.
    pub fn burn(&self, piece: &Piece, x: i32, y: i32) -> Grid {
        let mut burned = self.clone();
        for (dx, dy) in piece.cells() {
            burned.set(x + dx, y + dy, Some(piece.color));
        }
        burned
    }

    /// Game-over predicate: any cell of the top row is filled
    pub fn top_row_occupied(&self) -> bool {
        self.cells[..GRID_WIDTH].iter().any(|cell| cell.is_some())
    }

    /// Indices of completely filled rows, ascending
    pub fn full_rows(&self) -> RowIndices {
        (0..GRID_HEIGHT).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Copy of the grid with the given rows removed and as many empty rows added at
    /// the top
    ///
    /// Remaining rows keep their relative order. Out-of-range and repeated indices are
    /// ignored. Uses a two-pointer pass from the bottom without allocating.
    pub fn clear_rows(&self, rows: &[usize]) -> Grid {
        let mut cleared = Grid::new();
        let mut write_y = GRID_HEIGHT;

        for read_y in (0..GRID_HEIGHT).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            let src = read_y * GRID_WIDTH;
            let dst = write_y * GRID_WIDTH;
            cleared.cells[dst..dst + GRID_WIDTH]
                .copy_from_slice(&self.cells[src..src + GRID_WIDTH]);
        }

        cleared
    }

    /// Build a grid from rows of text, top row first
    ///
    /// `.` and ` ` are empty; any other character is filled with `fill`. Missing rows at
    /// the top and missing columns at the right are empty; extra input is ignored.
    /// Handy for scenario setup:
    ///
    /// ```
    /// use blockfall_core::Grid;
    /// use blockfall_core::types::Color;
    ///
    /// let grid = Grid::from_text(&["#########."], Color::Red);
    /// assert!(grid.is_occupied(0, 19));
    /// assert!(!grid.is_occupied(9, 19));
    /// ```
    pub fn from_text(rows: &[&str], fill: crate::types::Color) -> Grid {
        let mut grid = Grid::new();
        let skip = GRID_HEIGHT.saturating_sub(rows.len());
        let start = rows.len().saturating_sub(GRID_HEIGHT);
        for (i, line) in rows[start..].iter().enumerate() {
            let y = (skip + i) as i32;
            for (x, ch) in line.chars().take(GRID_WIDTH).enumerate() {
                if ch != '.' && ch != ' ' {
                    grid.set(x as i32, y, Some(fill));
                }
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
