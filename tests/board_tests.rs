//! Board tests: collision, merge and line clearing through the public API.

use blockfall::core::{base_matrix, clear_full_rows_in, rotate_clockwise, Board, Piece};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i32) {
    for x in 0..BOARD_WIDTH as i32 {
        board.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
}

#[test]
fn test_rows_above_top_never_collide() {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::I);
    piece.matrix = rotate_clockwise(&piece.matrix);
    piece.y = -3;
    // Three cells above the board, one on row 0.
    assert!(!board.collides(&piece));

    piece.y = -10;
    assert!(!board.collides(&piece));
}

#[test]
fn test_side_walls_and_floor_collide() {
    let board = Board::new();
    let o = base_matrix(PieceKind::O);
    assert!(board.collides_shape(&o, -1, 5));
    assert!(board.collides_shape(&o, BOARD_WIDTH as i32 - 1, 5));
    assert!(board.collides_shape(&o, 4, BOARD_HEIGHT as i32 - 1));
    assert!(!board.collides_shape(&o, 4, BOARD_HEIGHT as i32 - 2));
    // Out of range columns collide even above the top edge.
    assert!(board.collides_shape(&o, -1, -5));
}

#[test]
fn test_filled_cell_collides() {
    let mut board = Board::new();
    board.set(5, 10, Some(PieceKind::Z));
    let o = base_matrix(PieceKind::O);
    assert!(board.collides_shape(&o, 4, 9));
    assert!(board.collides_shape(&o, 5, 10));
    assert!(!board.collides_shape(&o, 6, 10));
}

#[test]
fn test_merge_writes_kind_and_drops_cells_above_top() {
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::T);
    piece.y = -1;
    board.merge(&piece);

    // Only the bottom row of the T (at y = 0) is on the board.
    let filled: Vec<(i32, i32)> = (0..BOARD_HEIGHT as i32)
        .flat_map(|y| (0..BOARD_WIDTH as i32).map(move |x| (x, y)))
        .filter(|&(x, y)| board.is_occupied(x, y))
        .collect();
    assert_eq!(filled, vec![(3, 0), (4, 0), (5, 0)]);
    assert_eq!(board.get(4, 0), Some(Some(PieceKind::T)));
}

#[test]
fn test_clear_single_bottom_row() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(2, 18, Some(PieceKind::S));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(2, 18), Some(None));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(0, 18, Some(PieceKind::J));
    fill_row(&mut board, 17);
    board.set(9, 16, Some(PieceKind::L));

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(9, 18), Some(Some(PieceKind::L)));
    assert!((0..18).all(|y| (0..10).all(|x| !board.is_occupied(x, y))));
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y);
    }
    assert_eq!(board.clear_full_rows(), 4);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_nothing_when_no_row_full() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::O));
    }
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_rows_in_small_grid() {
    let mut rows = vec![vec![1, 1], vec![0, 1], vec![1, 1], vec![1, 1]];
    assert_eq!(clear_full_rows_in(&mut rows), 3);
    assert_eq!(rows, vec![vec![0, 0], vec![0, 0], vec![0, 0], vec![0, 1]]);
}

#[test]
fn test_clear_rows_in_degenerate_grids() {
    let mut empty: Vec<Vec<u8>> = Vec::new();
    assert_eq!(clear_full_rows_in(&mut empty), 0);

    let mut zero_width: Vec<Vec<u8>> = vec![vec![], vec![]];
    assert_eq!(clear_full_rows_in(&mut zero_width), 0);
    assert_eq!(zero_width.len(), 2);
}
