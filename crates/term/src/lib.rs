//! Terminal presentation for blockfall.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! `GameView` paints a `GameSnapshot` into a `FrameBuffer`, and
//! `TerminalRenderer` flushes only the cells that changed since the last frame.
//! Each board cell is two columns wide so blocks look roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
