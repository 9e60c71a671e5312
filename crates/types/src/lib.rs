//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the rule engine, the input layer and the
//! terminal renderer. Everything here is plain data with no behaviour beyond parsing and
//! naming, so it can be used from any context (core rules, rendering, replay scripts).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (`SPAWN_X`, 0) = (3, 0)
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_LINE` | 100 | Score awarded per cleared row |
//! | `POINTS_PER_LEVEL` | 1000 | Score needed to advance one level |
//! | `STARTING_LEVEL` | 1 | Level of a fresh game |
//!
//! # Gravity Timing
//!
//! The tick rate belongs to the driver, not to the rules. The driver reads the
//! `level` of the current state and derives the interval from:
//!
//! - `BASE_TICK_MS`: 1000ms at level 1
//! - `TICK_DECREMENT_MS`: 100ms faster per level
//! - `MIN_TICK_MS`: 100ms floor
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Action, Axis, PieceKind, GRID_HEIGHT, GRID_WIDTH, SPAWN_X};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let action = Action::from_str("left").unwrap();
//! assert_eq!(action, Action::Move { axis: Axis::X, magnitude: -1 });
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! assert_eq!(SPAWN_X, 3);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Column at which a freshly promoted piece is placed
pub const SPAWN_X: i32 = (GRID_WIDTH / 2) as i32 - 2;

/// Level of a fresh game
pub const STARTING_LEVEL: u32 = 1;

/// Score awarded for each cleared row
pub const POINTS_PER_LINE: u32 = 100;

/// Score needed to advance one level
pub const POINTS_PER_LEVEL: u32 = 1000;

/// Gravity interval at level 1
pub const BASE_TICK_MS: u32 = 1000;

/// Gravity speed-up per level above the first
pub const TICK_DECREMENT_MS: u32 = 100;

/// Fastest gravity interval
pub const MIN_TICK_MS: u32 = 100;

/// Minimum time between two accepted rotate inputs
pub const ROTATE_COOLDOWN_MS: u32 = 120;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_and_spawn_constants() {
        assert_eq!(GRID_WIDTH, 10);
        assert_eq!(GRID_HEIGHT, 20);
        assert_eq!(SPAWN_X, 3);
        assert_eq!(STARTING_LEVEL, 1);
    }

    #[test]
    fn gravity_floor_is_reachable() {
        assert!(MIN_TICK_MS < BASE_TICK_MS);
        assert_eq!((BASE_TICK_MS - MIN_TICK_MS) % TICK_DECREMENT_MS, 0);
    }

    #[test]
    fn piece_kind_round_trips_through_its_name() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn action_names() {
        assert_eq!(
            Action::from_str("right"),
            Some(Action::Move { axis: Axis::X, magnitude: 1 })
        );
        assert_eq!(
            Action::from_str("DOWN"),
            Some(Action::Move { axis: Axis::Y, magnitude: 1 })
        );
        assert_eq!(Action::from_str("rotate"), Some(Action::Rotate));
        assert_eq!(Action::from_str(" drop "), Some(Action::Drop));
        assert_eq!(Action::from_str("restart"), Some(Action::Restart));
        assert_eq!(Action::from_str("hold"), None);
    }

    #[test]
    fn general_move_form() {
        assert_eq!(
            Action::from_str("move y 5"),
            Some(Action::Move { axis: Axis::Y, magnitude: 5 })
        );
        assert_eq!(
            Action::from_str("move x -3"),
            Some(Action::Move { axis: Axis::X, magnitude: -3 })
        );
        assert_eq!(Action::from_str("move z 1"), None);
        assert_eq!(Action::from_str("move x"), None);
        assert_eq!(Action::from_str("move x 1 2"), None);
        assert_eq!(Action::from_str("move x one"), None);
    }

    #[test]
    fn unit_moves_use_short_names() {
        assert_eq!(Action::Move { axis: Axis::X, magnitude: -1 }.as_str(), "left");
        assert_eq!(Action::Move { axis: Axis::Y, magnitude: 1 }.as_str(), "down");
        assert_eq!(Action::Move { axis: Axis::Y, magnitude: 4 }.as_str(), "move");
    }
}

/// The seven piece kinds, in catalog order
///
/// The order is significant: a random selector `0..=6` indexes the catalog in exactly
/// this order.
/// - **I**: Cyan, 4-long bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, indexed by selector.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Colour tag stored in grid cells once a piece has been burned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Blue,
    Orange,
    Green,
    Red,
}

impl Color {
    /// Compact non-zero code used in snapshots (0 is reserved for empty cells).
    pub fn code(&self) -> u8 {
        match self {
            Color::Cyan => 1,
            Color::Yellow => 2,
            Color::Purple => 3,
            Color::Blue => 4,
            Color::Orange => 5,
            Color::Green => 6,
            Color::Red => 7,
        }
    }

    /// Inverse of [`Color::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Color::Cyan),
            2 => Some(Color::Yellow),
            3 => Some(Color::Purple),
            4 => Some(Color::Blue),
            5 => Some(Color::Orange),
            6 => Some(Color::Green),
            7 => Some(Color::Red),
            _ => None,
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a burned piece of that colour
pub type Cell = Option<Color>;

/// Axis of a [`Action::Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Horizontal, positive to the right
    X,
    /// Vertical, positive downwards
    Y,
}

/// Actions that can be applied to a game state
///
/// Timer ticks and player input are both expressed as actions. The set is closed:
/// the rule engine dispatches over it with a single exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Action {
    /// Shift the active piece by `magnitude` cells along `axis`
    Move { axis: Axis, magnitude: i32 },
    /// Rotate the active piece 90° clockwise, with wall kicks
    Rotate,
    /// Start a new game, keeping the high score
    Restart,
    /// Move the active piece straight down as far as it can go
    Drop,
}

impl Action {
    pub const LEFT: Action = Action::Move {
        axis: Axis::X,
        magnitude: -1,
    };
    pub const RIGHT: Action = Action::Move {
        axis: Axis::X,
        magnitude: 1,
    };
    pub const DOWN: Action = Action::Move {
        axis: Axis::Y,
        magnitude: 1,
    };

    /// Parse an action from its script form
    ///
    /// Accepts the short names (`left`, `right`, `down`, `rotate`, `drop`, `restart`,
    /// case-insensitive) and the general form `move <x|y> <magnitude>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{Action, Axis};
    ///
    /// assert_eq!(Action::from_str("rotate"), Some(Action::Rotate));
    /// assert_eq!(
    ///     Action::from_str("move y 3"),
    ///     Some(Action::Move { axis: Axis::Y, magnitude: 3 })
    /// );
    /// assert_eq!(Action::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let mut words = lower.split_whitespace();
        let head = words.next()?;

        let action = match head {
            "left" => Action::LEFT,
            "right" => Action::RIGHT,
            "down" => Action::DOWN,
            "rotate" => Action::Rotate,
            "drop" => Action::Drop,
            "restart" => Action::Restart,
            "move" => {
                let axis = match words.next()? {
                    "x" => Axis::X,
                    "y" => Axis::Y,
                    _ => return None,
                };
                let magnitude = words.next()?.parse().ok()?;
                Action::Move { axis, magnitude }
            }
            _ => return None,
        };

        if words.next().is_some() {
            return None;
        }
        Some(action)
    }

    /// Short name of the action; general moves report `"move"`
    pub fn as_str(&self) -> &'static str {
        match *self {
            Action::LEFT => "left",
            Action::RIGHT => "right",
            Action::DOWN => "down",
            Action::Move { .. } => "move",
            Action::Rotate => "rotate",
            Action::Drop => "drop",
            Action::Restart => "restart",
        }
    }
}
