//! Core types: players, board, outcome evaluation, RNG.
//!
//! Nothing in this module holds state between calls. The controller owns the
//! canonical board; everything else works on copies.

pub mod board;
pub mod outcome;
pub mod rng;

pub use board::{col, row, Board, Cell, Player, CELL_COUNT, CENTER, CORNERS, EDGES, WINNING_LINES};
pub use outcome::{empty_cells, evaluate, winning_moves, Cells, Outcome, WinLine};
pub use rng::GameRng;
