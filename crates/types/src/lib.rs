//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, usable by the simulation core,
//! the terminal presentation and the input adapter alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_INTERVAL_MS` | 800 | Gravity interval at level 1 |
//! | `MIN_DROP_INTERVAL_MS` | 180 | Gravity interval floor |
//! | `LEVEL_TIME_MS` | 20000 | Play time per level |
//! | `LEVEL_STEP_MS` | 80 | Interval reduction per level |
//! | `FRAME_MS` | 16 | Driver frame budget (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.id(), 6);
//! assert_eq!(PieceKind::from_id(6), Some(PieceKind::T));
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(GameAction::from_str("jump"), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of distinct piece kinds
pub const PIECE_KIND_COUNT: u8 = 7;

/// Gravity interval at level 1
pub const BASE_DROP_INTERVAL_MS: u32 = 800;

/// Gravity never gets faster than this
pub const MIN_DROP_INTERVAL_MS: u32 = 180;

/// Total play time needed to advance one level (20 seconds)
pub const LEVEL_TIME_MS: u64 = 20_000;

/// Gravity interval reduction per level above 1
pub const LEVEL_STEP_MS: u32 = 80;

/// Points for a single line; `n` simultaneous lines score `n * n * LINE_CLEAR_BASE_SCORE`
pub const LINE_CLEAR_BASE_SCORE: u32 = 100;

/// Terminal columns per board cell (2 compensates the glyph aspect ratio)
pub const CELL_WIDTH: u16 = 2;

/// Terminal rows per board cell
pub const CELL_HEIGHT: u16 = 1;

/// Frame budget of the terminal driver (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// The seven tetromino piece kinds
///
/// Identifiers follow the catalog order, 1 through 7. Zero is reserved
/// for empty board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in identifier order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Numeric identifier (1..=7)
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]; 0 and anything above 7 map to `None`
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Numeric value of a cell: 0 for empty, otherwise the piece identifier.
pub fn cell_id(cell: Cell) -> u8 {
    cell.map(|k| k.id()).unwrap_or(0)
}

/// Gameplay actions surfaced by the input adapter.
///
/// `Restart` only has an effect after game over; the others only while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    Left,
    /// Move piece one column right
    Right,
    /// Drop piece one row, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to its lowest legal row and lock it
    HardDrop,
    /// Start a new game
    Restart,
}

impl GameAction {
    pub const ALL: [GameAction; 6] = [
        GameAction::Left,
        GameAction::Right,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Restart,
    ];

    /// Parse action from its name; unrecognized names are `None` and get ignored.
    ///
    /// The short names used by on-screen buttons (`down`, `hard`) are accepted too.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(GameAction::Left),
            "right" => Some(GameAction::Right),
            "softdrop" | "down" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" | "hard" => Some(GameAction::HardDrop),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Left => "left",
            GameAction::Right => "right",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Restart => "restart",
        }
    }
}

/// Session phase of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Playing,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_constants_are_consistent() {
        assert!(MIN_DROP_INTERVAL_MS < BASE_DROP_INTERVAL_MS);
        assert!(LEVEL_STEP_MS > 0);
        assert_eq!(LEVEL_TIME_MS, 20_000);
    }

    #[test]
    fn piece_ids_roundtrip_through_catalog_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.id() as usize, i + 1);
            assert_eq!(PieceKind::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(PieceKind::from_id(0), None);
        assert_eq!(PieceKind::from_id(8), None);
    }

    #[test]
    fn cell_id_uses_zero_for_empty() {
        assert_eq!(cell_id(None), 0);
        assert_eq!(cell_id(Some(PieceKind::Z)), 7);
    }

    #[test]
    fn action_names_are_case_insensitive() {
        assert_eq!(GameAction::from_str("LEFT"), Some(GameAction::Left));
        assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
        assert_eq!(GameAction::from_str("down"), Some(GameAction::SoftDrop));
        assert_eq!(GameAction::from_str("hard"), Some(GameAction::HardDrop));
        for action in GameAction::ALL {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
