//! Property tests for the rules that must hold for any board or input sequence.
//!
//! - Collision is exactly: column out of range, row at or past the floor, or
//!   overlap with a filled cell; rows above the top are free.
//! - Line clearing keeps every non-full row in order and refills the top.
//! - Level never falls and gravity never slows as play time grows.
//! - No sequence of actions leaves the active piece overlapping the stack.

use proptest::prelude::*;

use blockfall::core::{
    base_matrix, clear_full_rows_in, drop_interval_for_level, level_for_elapsed,
    rotate_clockwise, Board, GameState,
};
use blockfall::types::{
    GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MIN_DROP_INTERVAL_MS,
};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

fn board_from_bits(bits: &[bool]) -> Board {
    let mut board = Board::new();
    for (i, &filled) in bits.iter().enumerate() {
        if filled {
            board.set((i % W) as i32, (i / W) as i32, Some(PieceKind::Z));
        }
    }
    board
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

fn action_strategy() -> impl Strategy<Value = GameAction> {
    (0usize..GameAction::ALL.len()).prop_map(|i| GameAction::ALL[i])
}

proptest! {
    #[test]
    fn collision_matches_its_definition(
        bits in prop::collection::vec(prop::bool::weighted(0.3), W * H),
        kind in kind_strategy(),
        turns in 0usize..4,
        x in -4i32..14,
        y in -5i32..24,
    ) {
        let board = board_from_bits(&bits);
        let mut matrix = base_matrix(kind);
        for _ in 0..turns {
            matrix = rotate_clockwise(&matrix);
        }

        let expected = matrix.occupied().any(|(dx, dy)| {
            let (bx, by) = (x + dx, y + dy);
            if bx < 0 || bx >= W as i32 || by >= H as i32 {
                return true;
            }
            by >= 0 && bits[by as usize * W + bx as usize]
        });
        prop_assert_eq!(board.collides_shape(&matrix, x, y), expected);
    }

    #[test]
    fn clearing_keeps_surviving_rows_in_order(
        rows in (1usize..8).prop_flat_map(|w| {
            prop::collection::vec(
                prop::collection::vec(prop::sample::select(vec![0u8, 1, 1, 3]), w),
                0..24,
            )
        })
    ) {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let survivors: Vec<Vec<u8>> = rows
            .iter()
            .filter(|r| r.iter().any(|&v| v == 0))
            .cloned()
            .collect();
        let full = rows.len() - survivors.len();

        let mut grid = rows.clone();
        let cleared = clear_full_rows_in(&mut grid);

        prop_assert_eq!(cleared as usize, full);
        prop_assert_eq!(grid.len(), rows.len());
        prop_assert!(grid[..full].iter().all(|r| r.len() == width && r.iter().all(|&v| v == 0)));
        prop_assert_eq!(&grid[full..], &survivors[..]);
    }

    #[test]
    fn board_and_grid_clearing_agree(
        bits in prop::collection::vec(prop::bool::weighted(0.85), W * H),
    ) {
        let mut board = board_from_bits(&bits);
        let mut grid: Vec<Vec<u8>> = bits
            .chunks(W)
            .map(|row| row.iter().map(|&b| u8::from(b)).collect())
            .collect();

        let a = board.clear_full_rows();
        let b = clear_full_rows_in(&mut grid);
        prop_assert_eq!(a, b);

        for (y, row) in grid.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                prop_assert_eq!(board.is_occupied(x as i32, y as i32), v != 0);
            }
        }
    }

    #[test]
    fn difficulty_is_monotonic(a in 0u64..2_000_000, b in 0u64..2_000_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (level_lo, level_hi) = (level_for_elapsed(lo), level_for_elapsed(hi));
        prop_assert!(level_lo >= 1);
        prop_assert!(level_lo <= level_hi);

        let (slow, fast) = (drop_interval_for_level(level_lo), drop_interval_for_level(level_hi));
        prop_assert!(fast <= slow);
        prop_assert!(fast >= MIN_DROP_INTERVAL_MS);
    }

    #[test]
    fn active_piece_never_overlaps_stack(
        seed in any::<u64>(),
        steps in prop::collection::vec((action_strategy(), 0u32..400), 1..200),
    ) {
        let mut game = GameState::new(seed);
        let mut last_score = 0;
        let mut last_lines = 0;

        for (action, dt) in steps {
            let accepted = game.apply_action(action);
            if action == GameAction::Restart && accepted {
                last_score = 0;
                last_lines = 0;
            }
            game.tick(dt);

            if game.is_playing() {
                prop_assert!(!game.board().collides(game.active()));
            }
            prop_assert!(game.score() >= last_score);
            prop_assert!(game.lines() >= last_lines);
            prop_assert_eq!(game.level(), level_for_elapsed(game.elapsed_ms()));
            last_score = game.score();
            last_lines = game.lines();
        }
    }
}
