//! Adversarial search over the 3x3 game tree.
//!
//! ## Usage
//!
//! ```
//! use tictactoe_engine::core::{Board, Player};
//! use tictactoe_engine::search::{search, SCORE_MAX, SCORE_MIN};
//!
//! // X threatens row 0; O must block at 2.
//! let board: Board = "XX__O____".parse().unwrap();
//! let result = search(&board, 9, Player::O, SCORE_MIN, SCORE_MAX);
//! assert_eq!(result.best_move, Some(2));
//! ```

pub mod alphabeta;
pub mod minimax;
pub mod stats;

pub use alphabeta::{
    best_move, search, search_with_stats, Score, SearchResult, MAX_DEPTH, SCORE_MAX, SCORE_MIN,
    WIN_SCORE,
};
pub use minimax::{minimax, minimax_with_stats};
pub use stats::SearchStats;
