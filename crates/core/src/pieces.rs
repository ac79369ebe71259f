//! Pieces module - shape catalog, matrix rotation and the active piece
//!
//! Every kind is stored once, in its spawn orientation, as a small 0/1 matrix.
//! Other orientations are derived on demand by rotating the current matrix
//! clockwise; there is no stored rotation state and no kick table.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest side of any piece bounding box.
pub const MAX_SHAPE_SIDE: usize = 4;

/// One row of a shape matrix (1 = occupied, 0 = empty).
pub type ShapeRow = ArrayVec<u8, MAX_SHAPE_SIDE>;

/// Occupancy matrix of a piece inside its bounding box, row-major, row 0 on top.
///
/// Stack-only; cloning never allocates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ShapeMatrix {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_SIDE>,
}

impl ShapeMatrix {
    /// Build a matrix from row slices. Anything beyond 4x4 is cut off.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        Self {
            rows: rows
                .iter()
                .take(MAX_SHAPE_SIDE)
                .map(|row| row.iter().take(MAX_SHAPE_SIDE).copied().collect())
                .collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// True if the cell at (col, row) is occupied. Out of range is empty.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|&v| v != 0)
            .unwrap_or(false)
    }

    /// Occupied cells as (col, row) offsets inside the bounding box.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(col, _)| (col as i32, row as i32))
        })
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.occupied().count()
    }
}

/// Display color of a piece kind (24-bit RGB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PieceColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const J_ROWS: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L_ROWS: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];

/// Canonical spawn-orientation rows for a piece kind.
pub fn base_rows(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => I_ROWS,
        PieceKind::J => J_ROWS,
        PieceKind::L => L_ROWS,
        PieceKind::O => O_ROWS,
        PieceKind::S => S_ROWS,
        PieceKind::T => T_ROWS,
        PieceKind::Z => Z_ROWS,
    }
}

/// Canonical spawn-orientation matrix for a piece kind.
pub fn base_matrix(kind: PieceKind) -> ShapeMatrix {
    ShapeMatrix::from_rows(base_rows(kind))
}

/// Display color for a piece kind.
pub fn color(kind: PieceKind) -> PieceColor {
    match kind {
        PieceKind::I => PieceColor::new(0x00, 0xff, 0xff),
        PieceKind::J => PieceColor::new(0x00, 0x00, 0xff),
        PieceKind::L => PieceColor::new(0xff, 0xa5, 0x00),
        PieceKind::O => PieceColor::new(0xff, 0xff, 0x00),
        PieceKind::S => PieceColor::new(0x00, 0xff, 0x00),
        PieceKind::T => PieceColor::new(0x80, 0x00, 0x80),
        PieceKind::Z => PieceColor::new(0xff, 0x00, 0x00),
    }
}

/// Rotate a matrix 90° clockwise.
///
/// Row `i` of the result is column `i` of the input read bottom to top.
/// Rows left without any occupied cell are pruned.
pub fn rotate_clockwise(matrix: &ShapeMatrix) -> ShapeMatrix {
    let h = matrix.height();
    let w = matrix.width();

    let mut rows = ArrayVec::<ShapeRow, MAX_SHAPE_SIDE>::new();
    for col in 0..w {
        let row: ShapeRow = (0..h)
            .rev()
            .map(|r| if matrix.is_filled(col, r) { 1 } else { 0 })
            .collect();
        if row.iter().any(|&v| v != 0) {
            rows.push(row);
        }
    }

    ShapeMatrix { rows }
}

/// The active falling piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    /// Board column of the matrix's left edge.
    pub x: i32,
    /// Board row of the matrix's top edge (may be negative).
    pub y: i32,
}

impl Piece {
    /// New piece of `kind` in spawn orientation, centered horizontally on row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = base_matrix(kind);
        let x = (BOARD_WIDTH as i32 - matrix.width() as i32).div_euclid(2);
        Self {
            kind,
            matrix,
            x,
            y: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    pub fn height(&self) -> usize {
        self.matrix.height()
    }

    /// Absolute board coordinates (x, y) of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
