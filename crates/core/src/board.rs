//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Rows above the top edge (y < 0) are open space: pieces spawn and fall through
//! them, so they never count as a collision and are dropped on merge.

use crate::pieces::{Piece, ShapeMatrix};
use crate::types::{cell_id, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from numeric rows (0 = empty, 1..=7 = piece id).
    ///
    /// Unknown ids are treated as empty.
    pub fn from_id_rows(rows: &[[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                board.cells[y * BOARD_WIDTH as usize + x] = PieceKind::from_id(id);
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i32 || y < 0 || y >= BOARD_HEIGHT as i32 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
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

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Would `matrix` placed with its top-left corner at (x, y) collide?
    ///
    /// A cell collides when its column is outside `[0, width)`, its row is at or
    /// below the floor, or it overlaps a filled cell. Rows above the top are free.
    pub fn collides_shape(&self, matrix: &ShapeMatrix, x: i32, y: i32) -> bool {
        matrix.occupied().any(|(dx, dy)| {
            let bx = x + dx;
            let by = y + dy;
            if bx < 0 || bx >= BOARD_WIDTH as i32 || by >= BOARD_HEIGHT as i32 {
                return true;
            }
            by >= 0 && self.is_occupied(bx, by)
        })
    }

    /// Check the piece at its current position.
    pub fn collides(&self, piece: &Piece) -> bool {
        self.collides_shape(&piece.matrix, piece.x, piece.y)
    }

    /// Write the piece's kind into every board cell it covers.
    ///
    /// Cells outside the grid (including rows above the top) are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Remove every full row, shifting the rows above it down, and return how
    /// many were removed.
    ///
    /// Two-pointer compaction from the bottom up: surviving rows keep their
    /// relative order and empty rows refill the top, so stacked full rows are
    /// all caught in one pass.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;
        let mut cleared = 0;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a numeric id grid (0 = empty).
    pub fn write_id_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            for (x, v) in row.iter_mut().enumerate() {
                *v = cell_id(self.cells[start + x]);
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear full rows of an arbitrary id grid (row 0 on top, 0 = empty).
///
/// Scans bottom to top. A full row is taken out, zeroed and put back on top;
/// the same index is then examined again, since the row that slid into it may
/// be full too. Zero-width rows are never considered full.
pub fn clear_full_rows_in(rows: &mut Vec<Vec<u8>>) -> u32 {
    let mut cleared = 0;
    let mut y = rows.len();

    while y > 0 {
        let idx = y - 1;
        let full = !rows[idx].is_empty() && rows[idx].iter().all(|&v| v != 0);
        if full {
            let mut row = rows.remove(idx);
            row.fill(0);
            rows.insert(0, row);
            cleared += 1;
        } else {
            y -= 1;
        }
    }

    cleared
}
