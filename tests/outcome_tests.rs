//! Outcome evaluation properties over arbitrary boards.

use proptest::prelude::*;

use tictactoe_engine::core::{empty_cells, evaluate, winning_moves, Board, Cell, Outcome, Player, WINNING_LINES};

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(
        prop_oneof![
            Just(Cell::Empty),
            Just(Cell::Mark(Player::X)),
            Just(Cell::Mark(Player::O)),
        ],
        9,
    )
    .prop_map(|cells| Board::from_cells(&cells).unwrap())
}

/// Lines fully held by one player.
fn completed_lines(board: &Board) -> Vec<([usize; 3], Player)> {
    WINNING_LINES
        .iter()
        .filter_map(|&line| {
            let player = board.get(line[0]).mark()?;
            line.iter()
                .all(|&i| board.get(i) == Cell::Mark(player))
                .then_some((line, player))
        })
        .collect()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOXOXOOXO".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
    assert!(empty_cells(&board).is_empty());
}

#[test]
fn test_every_line_is_detected() {
    for line in WINNING_LINES {
        let mut board = Board::new();
        for index in line {
            board.place(index, Player::O);
        }

        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Player::O));
        assert_eq!(outcome.win_line().unwrap().cells(), line);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_single_line_is_won(board in arb_board()) {
        let lines = completed_lines(&board);
        prop_assume!(lines.len() == 1);

        let (line, player) = lines[0];
        match evaluate(&board) {
            Outcome::Won { player: winner, line: win_line } => {
                prop_assert_eq!(winner, player);
                prop_assert_eq!(win_line.start, line[0]);
                prop_assert_eq!(win_line.end, line[2]);
                prop_assert_eq!(win_line.middle(), line[1]);
            }
            other => prop_assert!(false, "expected a win, got {:?}", other),
        }
    }

    #[test]
    fn prop_no_line_full_is_draw_else_in_progress(board in arb_board()) {
        prop_assume!(completed_lines(&board).is_empty());

        let expected = if board.is_full() { Outcome::Draw } else { Outcome::InProgress };
        prop_assert_eq!(evaluate(&board), expected);
    }

    #[test]
    fn prop_empty_cells_ascending_and_exact(board in arb_board()) {
        let cells = empty_cells(&board);
        prop_assert!(cells.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(cells.len(), 9 - board.occupied_count());
        prop_assert!(cells.iter().all(|&i| board.is_empty_at(i)));
    }

    #[test]
    fn prop_winning_moves_complete_a_line(board in arb_board()) {
        prop_assume!(!evaluate(&board).is_terminal());

        for player in [Player::X, Player::O] {
            for index in winning_moves(&board, player) {
                let after = board.with_mark(index, player);
                prop_assert_eq!(evaluate(&after).winner(), Some(player));
            }
        }
    }
}
