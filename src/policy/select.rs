//! Computer move selection.
//!
//! Layers tier heuristics over [`search`](crate::search): randomized
//! openings, injected random moves, and the Optimus opening book. All
//! randomness comes from the caller's [`GameRng`], so a seeded generator
//! reproduces every branch exactly.

use crate::core::{empty_cells, evaluate, winning_moves, Board, Cells, GameRng, Player, CENTER, CORNERS};
use crate::error::{Error, Result};
use crate::search::best_move;

use super::config::{Difficulty, PolicyConfig, TierSettings};

/// Empty-cell count at or above which non-book tiers open randomly.
const RANDOM_OPENING_EMPTY_CELLS: usize = 8;

/// Which rule produced a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
    /// First or second ply, picked uniformly.
    RandomOpening,
    /// Random-move injection fired.
    RandomMove,
    /// Opening book: center was free.
    TakeCenter,
    /// Opening book: completes a line for the computer.
    Win,
    /// Opening book: stops the human completing a line.
    Block,
    /// Opening book: reply to a single opening move.
    BookReply,
    /// Minimax search.
    Search,
}

/// A chosen cell and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub reason: SelectionReason,
}

impl Selection {
    const fn new(index: usize, reason: SelectionReason) -> Self {
        Self { index, reason }
    }
}

/// Pick the computer's move at `difficulty` with the default tier table.
pub fn select_move(board: &Board, difficulty: Difficulty, rng: &mut GameRng) -> Result<usize> {
    let config = PolicyConfig::default();
    select_with(board, config.tier(difficulty), rng).map(|selection| selection.index)
}

/// Pick the computer's move with explicit tier settings.
///
/// Fails with [`Error::NoLegalMove`] when the board is full or already
/// decided.
pub fn select_with(board: &Board, tier: &TierSettings, rng: &mut GameRng) -> Result<Selection> {
    let empty = empty_cells(board);
    if empty.is_empty() || evaluate(board).is_terminal() {
        return Err(Error::NoLegalMove);
    }

    if tier.opening_book {
        if let Some(selection) = opening_book(board, rng) {
            return Ok(selection);
        }
    } else if tier.randomize_opening && empty.len() >= RANDOM_OPENING_EMPTY_CELLS {
        return Ok(Selection::new(random_cell(&empty, rng), SelectionReason::RandomOpening));
    }

    if tier.random_move_probability > 0.0 && rng.gen_unit() < tier.random_move_probability {
        return Ok(Selection::new(random_cell(&empty, rng), SelectionReason::RandomMove));
    }

    let index = best_move(board, tier.depth, Player::COMPUTER)
        .best_move
        .unwrap_or(empty[0]);
    Ok(Selection::new(index, SelectionReason::Search))
}

/// Optimus shortcuts, checked in order. `None` falls through to search.
fn opening_book(board: &Board, rng: &mut GameRng) -> Option<Selection> {
    if board.is_empty_at(CENTER) {
        return Some(Selection::new(CENTER, SelectionReason::TakeCenter));
    }

    if let Some(&index) = winning_moves(board, Player::COMPUTER).first() {
        return Some(Selection::new(index, SelectionReason::Win));
    }

    if let Some(&index) = winning_moves(board, Player::HUMAN).first() {
        return Some(Selection::new(index, SelectionReason::Block));
    }

    if board.occupied_count() == 1 {
        // Center is taken here, so the single opening move was the center.
        // A corner or edge opening is answered by the center check above.
        return rng
            .choose(&CORNERS)
            .map(|&corner| Selection::new(corner, SelectionReason::BookReply));
    }

    None
}

fn random_cell(empty: &Cells, rng: &mut GameRng) -> usize {
    rng.choose(empty).copied().unwrap_or(empty[0])
}
