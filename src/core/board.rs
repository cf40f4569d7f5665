//! Players, cells, and the 3x3 board.
//!
//! ## Board layout
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! --+---+--
//! 3 | 4 | 5
//! --+---+--
//! 6 | 7 | 8
//! ```
//!
//! A `Board` is `Copy`: search and selection work on their own copies and
//! never touch the controller's canonical board.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Corner cell indices.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge (non-corner, non-center) cell indices.
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// The eight winning lines, in evaluation precedence order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Row of a cell index.
#[must_use]
pub const fn row(index: usize) -> usize {
    index / 3
}

/// Column of a cell index.
#[must_use]
pub const fn col(index: usize) -> usize {
    index % 3
}

/// One of the two sides.
///
/// `X` is always the human and moves first; `O` is always the computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The human side.
    pub const HUMAN: Player = Player::X;

    /// The computer side (the maximizer in search).
    pub const COMPUTER: Player = Player::O;

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used in the board text form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Mark(player) => player.symbol(),
        }
    }

    fn parse(character: char, position: usize) -> Result<Self> {
        match character {
            'X' | 'x' => Ok(Cell::Mark(Player::X)),
            'O' | 'o' => Ok(Cell::Mark(Player::O)),
            '_' | '.' | '-' => Ok(Cell::Empty),
            _ => Err(Error::InvalidCell {
                character,
                position,
            }),
        }
    }
}

/// A 3x3 board snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board([Cell; CELL_COUNT]);

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self([Cell::Empty; CELL_COUNT])
    }

    /// Build a board from a slice of exactly nine cells.
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| Error::InvalidBoard { len: cells.len() })?;
        Ok(Self(cells))
    }

    /// All cells in index order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.0
    }

    /// Cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn get(&self, index: usize) -> Cell {
        self.0[index]
    }

    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.0[index].is_empty()
    }

    /// Place a mark, overwriting whatever was there.
    ///
    /// Legality is the caller's concern; search relies on this being cheap.
    pub fn place(&mut self, index: usize, player: Player) {
        self.0[index] = Cell::Mark(player);
    }

    /// Copy of this board with `player` placed at `index`.
    #[must_use]
    pub fn with_mark(mut self, index: usize, player: Player) -> Self {
        self.place(index, player);
        self
    }

    /// Number of cells holding `player`'s mark.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.0
            .iter()
            .filter(|cell| **cell == Cell::Mark(player))
            .count()
    }

    /// Number of occupied cells (plies played).
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.0.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| !cell.is_empty())
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = Error;

    fn try_from(cells: &[Cell]) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse the 9-character text form, e.g. `"XX_OO____"`.
    fn from_str(s: &str) -> Result<Self> {
        let cells = s
            .chars()
            .enumerate()
            .map(|(position, character)| Cell::parse(character, position))
            .collect::<Result<Vec<_>>>()?;
        Self::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}
