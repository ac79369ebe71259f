//! Game state module - the simulation engine
//!
//! Ties together board, active piece, next-piece generation and scoring. Owns
//! every piece of gameplay state; presentation and input only read snapshots
//! and feed [`GameAction`]s.
//!
//! The engine has no clock of its own. The driver measures frame time and calls
//! [`GameState::tick`] with the elapsed milliseconds.

use log::{debug, info};

use crate::board::Board;
use crate::pieces::{rotate_clockwise, Piece};
use crate::rng::PieceRng;
use crate::scoring::{drop_interval_for_level, level_for_elapsed, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Horizontal offsets tried, in order, when a rotation collides.
const ROTATION_KICKS: [i32; 3] = [0, -1, 1];

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_awarded: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    /// Pending kind for the next spawn (lookahead of one).
    next: Option<PieceKind>,
    rng: PieceRng,
    /// Monotonic id of spawned pieces within a session.
    piece_id: u32,
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    level: u32,
    total_ms: u64,
    drop_timer_ms: u32,
    drop_interval_ms: u32,
    phase: Phase,
}

impl GameState {
    /// Create a new game with a fixed RNG seed and spawn the first piece.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(PieceRng::new(seed))
    }

    /// Create a new game seeded from the OS.
    pub fn from_entropy() -> Self {
        Self::with_rng(PieceRng::from_entropy())
    }

    fn with_rng(rng: PieceRng) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: Piece::spawn(PieceKind::I),
            next: None,
            rng,
            piece_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
            level: 1,
            total_ms: 0,
            drop_timer_ms: 0,
            drop_interval_ms: BASE_DROP_INTERVAL_MS,
            phase: Phase::Playing,
        };
        state.reset();
        state
    }

    /// Start a new session: empty board, zeroed counters, level 1, fresh piece.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.total_ms = 0;
        self.drop_timer_ms = 0;
        self.drop_interval_ms = BASE_DROP_INTERVAL_MS;
        self.phase = Phase::Playing;
        self.piece_id = 0;
        self.last_event = None;
        self.next = Some(self.rng.next_kind());

        self.spawn();
        info!("new game started with {:?}", self.active.kind);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions in tests and benches.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_id_grid(&mut out.board);

        out.active.kind = self.active.kind;
        out.active.matrix.clone_from(&self.active.matrix);
        out.active.x = self.active.x;
        out.active.y = self.active.y;
        out.next = self.next;
        out.piece_id = self.piece_id;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.elapsed_ms = self.total_ms;
        out.drop_interval_ms = self.drop_interval_ms;
        out.phase = self.phase;
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot {
            active: ActiveSnapshot::from(&self.active),
            ..GameSnapshot::default()
        };
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn the pending next kind (or a fresh random one) and pick a new pending kind.
    ///
    /// The piece is centered on row 0. If it overlaps the stack the session ends.
    /// Returns false on game over.
    pub fn spawn(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.rng.next_kind(),
        };
        self.active = Piece::spawn(kind);
        self.next = Some(self.rng.next_kind());
        self.piece_id = self.piece_id.wrapping_add(1);

        if self.board.collides(&self.active) {
            self.phase = Phase::GameOver;
            info!(
                "game over: score={} lines={} level={}",
                self.score, self.lines, self.level
            );
            return false;
        }

        debug!(
            "spawned {:?} at ({}, {}), next {:?}",
            kind, self.active.x, self.active.y, self.next
        );
        true
    }

    /// Shift the piece one column; `dir` < 0 is left, > 0 is right.
    ///
    /// A colliding shift is rejected. Returns whether the piece moved.
    pub fn move_piece(&mut self, dir: i32) -> bool {
        if !self.is_playing() {
            return false;
        }
        let dx = dir.signum();
        if dx == 0 {
            return false;
        }

        let active = &self.active;
        if self
            .board
            .collides_shape(&active.matrix, active.x + dx, active.y)
        {
            return false;
        }
        self.active.x += dx;
        true
    }

    /// Rotate the piece clockwise, trying x, then x-1, then x+1.
    ///
    /// If all three collide the piece is left exactly as it was.
    pub fn rotate(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        let rotated = rotate_clockwise(&self.active.matrix);
        let (x, y) = (self.active.x, self.active.y);

        for kick in ROTATION_KICKS {
            if !self.board.collides_shape(&rotated, x + kick, y) {
                self.active.matrix = rotated;
                self.active.x = x + kick;
                return true;
            }
        }

        false
    }

    /// Move the piece down one row, locking it if it cannot move.
    ///
    /// Always resets the gravity timer. Returns true if the piece moved,
    /// false if it locked (or the game is over).
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.drop_timer_ms = 0;

        let active = &self.active;
        if self
            .board
            .collides_shape(&active.matrix, active.x, active.y + 1)
        {
            self.lock_piece();
            return false;
        }
        self.active.y += 1;
        true
    }

    /// Drop the piece to the lowest legal row and lock it.
    ///
    /// Returns the number of rows the piece fell.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_playing() {
            return 0;
        }

        let active = &self.active;
        let mut distance: i32 = 0;
        while active.y + distance < BOARD_HEIGHT as i32
            && !self
                .board
                .collides_shape(&active.matrix, active.x, active.y + distance + 1)
        {
            distance += 1;
        }

        self.active.y += distance;
        self.drop_timer_ms = 0;
        self.lock_piece();

        distance as u32
    }

    /// Merge the active piece, clear rows, score, and spawn the next piece.
    fn lock_piece(&mut self) {
        self.board.merge(&self.active);

        let cleared = self.board.clear_full_rows();
        let awarded = line_clear_score(cleared);
        self.lines = self.lines.saturating_add(cleared);
        self.score = self.score.saturating_add(awarded);

        if cleared > 0 {
            debug!("cleared {} line(s) for {} points", cleared, awarded);
        }
        self.last_event = Some(LockEvent {
            kind: self.active.kind,
            lines_cleared: cleared,
            score_awarded: awarded,
        });

        self.spawn();
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the clocks by `elapsed_ms` and apply gravity.
    ///
    /// Level and drop interval are recomputed from the total play time. When the
    /// gravity timer exceeds the interval exactly one soft drop happens.
    /// Returns true if gravity fired. Frozen while game over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        self.total_ms = self.total_ms.saturating_add(elapsed_ms as u64);

        let level = level_for_elapsed(self.total_ms);
        if level != self.level {
            info!("level {} -> {}", self.level, level);
            self.level = level;
        }
        self.drop_interval_ms = drop_interval_for_level(self.level);

        if self.drop_timer_ms > self.drop_interval_ms {
            self.soft_drop();
            return true;
        }

        false
    }

    /// Apply an input action. Returns true if the action was accepted.
    ///
    /// `Restart` is only honoured after game over; everything else only while playing.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Left => self.move_piece(-1),
            GameAction::Right => self.move_piece(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                if !self.is_playing() {
                    return false;
                }
                self.soft_drop();
                true
            }
            GameAction::HardDrop => {
                if !self.is_playing() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Restart => {
                if self.is_playing() {
                    return false;
                }
                self.reset();
                true
            }
        }
    }

    /// Check if the piece could be shifted by (dx, dy) without colliding
    pub fn can_move(&self, dx: i32, dy: i32) -> bool {
        let active = &self.active;
        !self
            .board
            .collides_shape(&active.matrix, active.x + dx, active.y + dy)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
