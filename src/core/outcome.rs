//! Outcome evaluation: winner, win line, draw, and legal moves.
//!
//! Everything here is a pure function of a [`Board`]. The board type
//! guarantees exactly nine cells, so malformed input is rejected when the
//! board is built (see [`Board::from_cells`]) rather than here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Cell, Player, CELL_COUNT, WINNING_LINES};

/// Cell indices, at most nine of them.
pub type Cells = SmallVec<[usize; CELL_COUNT]>;

/// Endpoints of a completed line of three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    pub start: usize,
    pub end: usize,
}

impl WinLine {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Middle cell of the line.
    ///
    /// Only valid for the eight canonical lines, where the middle index is
    /// always the mean of the endpoints.
    #[must_use]
    pub const fn middle(self) -> usize {
        (self.start + self.end) / 2
    }

    /// All three cells, start to end.
    #[must_use]
    pub const fn cells(self) -> [usize; 3] {
        [self.start, self.middle(), self.end]
    }
}

/// Result of evaluating a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won {
        player: Player,
        line: WinLine,
    },
    Draw,
}

impl Outcome {
    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(player),
            _ => None,
        }
    }

    /// The winning line, if any.
    #[must_use]
    pub const fn win_line(self) -> Option<WinLine> {
        match self {
            Outcome::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Evaluate a board.
///
/// Lines are checked in [`WINNING_LINES`] order and the first complete one
/// wins. A full board with no complete line is a draw.
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();

    for [a, b, c] in WINNING_LINES {
        if let Cell::Mark(player) = cells[a] {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                return Outcome::Won {
                    player,
                    line: WinLine::new(a, c),
                };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Indices of all empty cells, ascending.
#[must_use]
pub fn empty_cells(board: &Board) -> Cells {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

/// Cells where `player` would complete a line on their next move, ascending.
#[must_use]
pub fn winning_moves(board: &Board, player: Player) -> Cells {
    let mut moves: Cells = WINNING_LINES
        .iter()
        .filter_map(|line| completing_cell(board, player, line))
        .collect();
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// The empty cell that completes `line` for `player`, if the other two
/// cells already hold `player`'s mark.
fn completing_cell(board: &Board, player: Player, line: &[usize; 3]) -> Option<usize> {
    let mut empty = None;

    for &index in line {
        match board.get(index) {
            Cell::Empty if empty.is_none() => empty = Some(index),
            Cell::Mark(mark) if mark == player => {}
            _ => return None,
        }
    }

    empty
}
