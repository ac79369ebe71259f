use blockfall::core::{ActiveSnapshot, GameState, Piece};
use blockfall::term::{AnchorY, GameView, Rgb, Viewport};
use blockfall::types::{Phase, PieceKind};

fn t_piece_at(x: i32, y: i32) -> ActiveSnapshot {
    let mut piece = Piece::spawn(PieceKind::T);
    piece.x = x;
    piece.y = y;
    ActiveSnapshot::from(&piece)
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = PieceKind::I.id();
    snap.active = t_piece_at(3, 0);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, Rgb::new(0x00, 0xff, 0xff));
    assert_eq!(fb.get(3, 20).unwrap().ch, ' ');
}

#[test]
fn term_view_skips_active_cells_above_the_top() {
    let mut snap = GameState::new(1).snapshot();
    snap.active = t_piece_at(3, -1);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Top border is intact; only the T's bottom row shows on board row 0.
    assert!(fb.row_text(0).chars().skip(1).take(20).all(|c| c == '─'));
    assert_eq!(fb.row_text(1), "│      ██████        │");
}

#[test]
fn term_view_side_panel_shows_stats_and_next() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1600;
    snap.lines = 4;
    snap.level = 3;
    snap.next = Some(PieceKind::O);

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(50, 22));

    // Board frame is centered at x=14, so the panel starts at x=38.
    assert!(fb.row_text(0).contains("SCORE"));
    assert!(fb.row_text(1).contains("1600"));
    assert!(fb.row_text(3).contains("LINES"));
    assert!(fb.row_text(4).ends_with("4           "));
    assert!(fb.row_text(6).contains("LEVEL"));
    assert!(fb.row_text(7).ends_with("3           "));
    assert!(fb.row_text(9).contains("NEXT"));
    assert!(fb.row_text(10).ends_with("████        "));
    assert!(fb.row_text(11).ends_with("████        "));
}

#[test]
fn term_view_draws_game_over_overlay() {
    let mut snap = GameState::new(1).snapshot();
    snap.phase = Phase::GameOver;
    snap.game_over = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(fb.row_text(12).contains("restart"));
}

#[test]
fn term_view_has_no_overlay_while_playing() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!((0..22).all(|y| !fb.row_text(y).contains("GAME OVER")));
}

#[test]
fn term_view_tolerates_tiny_viewport() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
