//! Plain minimax without pruning.
//!
//! Visits every node, so it is only used as the reference that
//! [`search`](super::search) is checked against, and as the baseline in the
//! search benchmark.

use crate::core::{empty_cells, Board, Player};

use super::alphabeta::{leaf_score, SearchResult, SCORE_MAX, SCORE_MIN};
use super::stats::SearchStats;

/// Unpruned minimax with the same scoring and tie-breaking as
/// [`search`](super::search): the first move reaching the best score wins.
#[must_use]
pub fn minimax(board: &Board, depth: u8, to_move: Player) -> SearchResult {
    let mut stats = SearchStats::new();
    minimax_with_stats(board, depth, to_move, &mut stats)
}

/// Like [`minimax`], recording the node count into `stats`.
pub fn minimax_with_stats(
    board: &Board,
    depth: u8,
    to_move: Player,
    stats: &mut SearchStats,
) -> SearchResult {
    expand(*board, depth, 0, to_move, stats)
}

fn expand(board: Board, depth: u8, ply: u8, to_move: Player, stats: &mut SearchStats) -> SearchResult {
    stats.visit(ply);

    if let Some(score) = leaf_score(&board, depth, ply) {
        return SearchResult::leaf(score);
    }

    let maximizing = to_move == Player::COMPUTER;
    let mut best = SearchResult::leaf(if maximizing { SCORE_MIN } else { SCORE_MAX });

    for index in empty_cells(&board) {
        let child = board.with_mark(index, to_move);
        let score = expand(child, depth - 1, ply + 1, to_move.opponent(), stats).score;

        let improves = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                score,
                best_move: Some(index),
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_tree_node_count() {
        // Every game of tic-tac-toe, counting the root: 549,946 nodes.
        let mut stats = SearchStats::new();
        let _ = minimax_with_stats(&Board::new(), 9, Player::X, &mut stats);
        assert_eq!(stats.nodes, 549_946);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_empty_board_value() {
        assert_eq!(minimax(&Board::new(), 9, Player::X).score, 0);
    }
}
