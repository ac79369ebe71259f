//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the simulation engine. It has
//! **no dependencies** on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, property tests for the invariants
//! - **Portable**: Can run in any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision, merge and line clearing
//! - [`pieces`]: Shape catalog, clockwise matrix rotation, the active [`Piece`]
//! - [`game_state`]: The simulation engine: spawn, move, rotate, drops, gravity
//! - [`rng`]: Uniform, independent next-piece draws
//! - [`scoring`]: Line-clear points and the time-driven difficulty ramp
//! - [`snapshot`]: Plain-data view handed to presentation each frame
//!
//! # Game Rules
//!
//! - **Simple rotation**: clockwise only, with a left-then-right one-column kick
//! - **Lookahead**: exactly one upcoming piece is known
//! - **Scoring**: `n` lines in one lock score `n² × 100`
//! - **Difficulty**: one level per 20 seconds of play; gravity 800ms at
//!   level 1, 80ms faster per level, never below 180ms
//! - **Game over**: a freshly spawned piece overlaps the stack
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::Right);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // One piece locked, the next one spawned.
//! assert_eq!(game.piece_id(), 2);
//! assert!(game.board().cells().iter().any(|c| c.is_some()));
//! ```
//!
//! # Timing
//!
//! There is no internal clock. Call [`GameState::tick`] once per frame
//! with the milliseconds elapsed since the previous frame.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{clear_full_rows_in, Board};
pub use game_state::{GameState, LockEvent};
pub use pieces::{base_matrix, color, rotate_clockwise, Piece, PieceColor, ShapeMatrix};
pub use rng::PieceRng;
pub use scoring::{drop_interval_for_level, level_for_elapsed, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
