//! Read-only per-frame view of the game for presentation.

use serde::Serialize;

use crate::pieces::{base_matrix, Piece, ShapeMatrix};
use crate::types::{Phase, PieceKind, BASE_DROP_INTERVAL_MS, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i32,
    pub y: i32,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            matrix: value.matrix.clone(),
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// Locked cells as piece ids, 0 = empty, row 0 on top.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: Option<PieceKind>,
    pub piece_id: u32,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub elapsed_ms: u64,
    pub drop_interval_ms: u32,
    pub phase: Phase,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = ActiveSnapshot::from(&Piece::spawn(PieceKind::I));
        self.next = None;
        self.piece_id = 0;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.elapsed_ms = 0;
        self.drop_interval_ms = BASE_DROP_INTERVAL_MS;
        self.phase = Phase::Playing;
        self.game_over = false;
    }

    /// Spawn-orientation matrix of the upcoming piece, for the preview panel.
    pub fn next_matrix(&self) -> Option<ShapeMatrix> {
        self.next.map(base_matrix)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::from(&Piece::spawn(PieceKind::I)),
            next: None,
            piece_id: 0,
            score: 0,
            lines: 0,
            level: 1,
            elapsed_ms: 0,
            drop_interval_ms: BASE_DROP_INTERVAL_MS,
            phase: Phase::Playing,
            game_over: false,
        }
    }
}
