//! Depth-limited minimax with alpha-beta pruning.
//!
//! The computer (`O`) maximizes and the human (`X`) minimizes. Scores are
//! relative to the search root:
//!
//! - `O` wins after `ply` plies: `10 - ply`
//! - `X` wins after `ply` plies: `ply - 10`
//! - draw, or depth exhausted: `0`
//!
//! so among lines with the same result the engine prefers faster wins and
//! slower losses. Every recursive call works on its own copy of the board;
//! there is no shared mutable state and no randomness.

use crate::core::{empty_cells, evaluate, Board, Outcome, Player};

use super::stats::SearchStats;

/// Search score from the computer's point of view.
pub type Score = i32;

/// Score of a win on the spot, before the ply discount.
pub const WIN_SCORE: Score = 10;

/// Lower bound for the initial alpha.
pub const SCORE_MIN: Score = Score::MIN;

/// Upper bound for the initial beta.
pub const SCORE_MAX: Score = Score::MAX;

/// Deepest useful search: one ply per cell.
pub const MAX_DEPTH: u8 = 9;

/// Score and chosen move of a search node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: Score,
    /// `None` at leaves (terminal boards and depth cutoffs).
    pub best_move: Option<usize>,
}

impl SearchResult {
    pub(crate) const fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Search `board` with `to_move` on move, `depth` plies deep, inside the
/// `(alpha, beta)` window.
///
/// Called with the full window (`SCORE_MIN`, `SCORE_MAX`) the result is
/// identical to [`minimax`](super::minimax) on the same input.
#[must_use]
pub fn search(board: &Board, depth: u8, to_move: Player, alpha: Score, beta: Score) -> SearchResult {
    let mut stats = SearchStats::new();
    search_with_stats(board, depth, to_move, alpha, beta, &mut stats)
}

/// Like [`search`], recording node and cutoff counts into `stats`.
pub fn search_with_stats(
    board: &Board,
    depth: u8,
    to_move: Player,
    alpha: Score,
    beta: Score,
    stats: &mut SearchStats,
) -> SearchResult {
    alphabeta(*board, depth, 0, to_move, alpha, beta, stats)
}

/// Full-window search for the side to move.
#[must_use]
pub fn best_move(board: &Board, depth: u8, to_move: Player) -> SearchResult {
    search(board, depth, to_move, SCORE_MIN, SCORE_MAX)
}

/// Score of a node that is not expanded further, if it is one.
pub(crate) fn leaf_score(board: &Board, depth: u8, ply: u8) -> Option<Score> {
    let ply = Score::from(ply);

    match evaluate(board) {
        Outcome::Won {
            player: Player::O, ..
        } => Some(WIN_SCORE - ply),
        Outcome::Won {
            player: Player::X, ..
        } => Some(ply - WIN_SCORE),
        Outcome::Draw => Some(0),
        Outcome::InProgress if depth == 0 => Some(0),
        Outcome::InProgress => None,
    }
}

fn alphabeta(
    board: Board,
    depth: u8,
    ply: u8,
    to_move: Player,
    mut alpha: Score,
    mut beta: Score,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.visit(ply);

    if let Some(score) = leaf_score(&board, depth, ply) {
        return SearchResult::leaf(score);
    }

    let maximizing = to_move == Player::COMPUTER;
    let mut best = SearchResult::leaf(if maximizing { SCORE_MIN } else { SCORE_MAX });

    for index in empty_cells(&board) {
        let child = board.with_mark(index, to_move);
        let score = alphabeta(child, depth - 1, ply + 1, to_move.opponent(), alpha, beta, stats).score;

        if maximizing {
            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: Some(index),
                };
            }
            alpha = alpha.max(best.score);
        } else {
            if score < best.score {
                best = SearchResult {
                    score,
                    best_move: Some(index),
                };
            }
            beta = beta.min(best.score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}
