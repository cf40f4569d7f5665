//! Search integration tests: alpha-beta against the unpruned reference.

use std::collections::HashSet;

use proptest::prelude::*;

use tictactoe_engine::core::{empty_cells, evaluate, Board, Cell, Player};
use tictactoe_engine::search::{
    best_move, minimax, minimax_with_stats, search, search_with_stats, SearchStats, MAX_DEPTH, SCORE_MAX,
    SCORE_MIN,
};

/// Every position reachable from the empty board with X moving first,
/// paired with the side to move. Finished positions are included.
fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut frontier = vec![(Board::new(), Player::X)];

    while let Some((board, to_move)) = frontier.pop() {
        if !seen.insert(board) {
            continue;
        }
        out.push((board, to_move));

        if evaluate(&board).is_terminal() {
            continue;
        }
        for index in empty_cells(&board) {
            frontier.push((board.with_mark(index, to_move), to_move.opponent()));
        }
    }

    out
}

// =============================================================================
// Equivalence Tests
// =============================================================================

#[test]
fn test_reachable_position_count() {
    // 5478 legal positions, counting the empty board.
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn test_alphabeta_matches_minimax_everywhere() {
    for (board, to_move) in reachable_positions() {
        for depth in 0..=MAX_DEPTH {
            let pruned = best_move(&board, depth, to_move);
            let full = minimax(&board, depth, to_move);
            assert_eq!(pruned, full, "board {board} depth {depth} {to_move} to move");
        }
    }
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let board = Board::new();

    let mut pruned = SearchStats::new();
    let mut full = SearchStats::new();
    search_with_stats(&board, MAX_DEPTH, Player::O, SCORE_MIN, SCORE_MAX, &mut pruned);
    minimax_with_stats(&board, MAX_DEPTH, Player::O, &mut full);

    assert!(pruned.nodes < full.nodes / 10, "{} vs {}", pruned.nodes, full.nodes);
    assert!(pruned.cutoffs > 0);
    assert_eq!(full.cutoffs, 0);
    assert_eq!(pruned.max_ply, 9);
    assert_eq!(full.max_ply, 9);
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_terminal_and_depth_zero_have_no_move() {
    let won: Board = "XXXOO____".parse().unwrap();
    assert_eq!(best_move(&won, 9, Player::O).best_move, None);
    assert_eq!(best_move(&won, 9, Player::O).score, -10);

    let open: Board = "X________".parse().unwrap();
    let result = best_move(&open, 0, Player::O);
    assert_eq!(result.score, 0);
    assert_eq!(result.best_move, None);
}

#[test]
fn test_perfect_play_from_every_opening_is_a_draw() {
    for index in 0..9 {
        let board = Board::new().with_mark(index, Player::X);
        assert_eq!(best_move(&board, MAX_DEPTH, Player::O).score, 0, "opening at {index}");
    }
}

#[test]
fn test_corner_opening_is_answered_by_center() {
    // Only the center holds the draw against a corner opening.
    for corner in [0, 2, 6, 8] {
        let board = Board::new().with_mark(corner, Player::X);
        assert_eq!(best_move(&board, MAX_DEPTH, Player::O).best_move, Some(4));
    }
}

#[test]
fn test_forced_loss_is_delayed() {
    // O must block the diagonal at 8, after which X forks with 6.
    let board: Board = "X___X__O_".parse().unwrap();
    let result = best_move(&board, MAX_DEPTH, Player::O);
    assert_eq!(result.best_move, Some(8));
    assert_eq!(result.score, -6);
}

#[test]
fn test_narrow_window_bounds_hold() {
    let board: Board = "X___O____".parse().unwrap();
    let exact = best_move(&board, MAX_DEPTH, Player::X).score;

    // Fail-high and fail-low results stay on the correct side of the window.
    let high = search(&board, MAX_DEPTH, Player::X, exact - 3, exact - 1);
    assert!(high.score >= exact - 1);
    let low = search(&board, MAX_DEPTH, Player::X, exact + 1, exact + 3);
    assert!(low.score <= exact + 1);
}

// =============================================================================
// Property Tests
// =============================================================================

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        2 => Just(Cell::Empty),
        1 => Just(Cell::Mark(Player::X)),
        1 => Just(Cell::Mark(Player::O)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(arb_cell(), 9).prop_map(|cells| Board::from_cells(&cells).unwrap())
}

fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

proptest! {
    #[test]
    fn prop_alphabeta_matches_minimax(board in arb_board(), to_move in arb_player(), depth in 0..=MAX_DEPTH) {
        prop_assert_eq!(best_move(&board, depth, to_move), minimax(&board, depth, to_move));
    }

    #[test]
    fn prop_best_move_is_legal(board in arb_board(), to_move in arb_player(), depth in 1..=MAX_DEPTH) {
        let result = best_move(&board, depth, to_move);
        match result.best_move {
            Some(index) => prop_assert!(board.is_empty_at(index)),
            None => prop_assert!(evaluate(&board).is_terminal()),
        }
    }

    #[test]
    fn prop_score_is_bounded(board in arb_board(), to_move in arb_player(), depth in 0..=MAX_DEPTH) {
        let score = best_move(&board, depth, to_move).score;
        prop_assert!((-10..=10).contains(&score));
    }
}
