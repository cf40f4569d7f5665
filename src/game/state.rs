//! The aggregate game state and its vocabulary.
//!
//! `GameState` is what the controller owns, what the presentation layer
//! renders, and what persistence stores. It is cheap to clone: the board is
//! `Copy` and unlocked themes live in an `im::OrdSet`.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::core::{Board, Outcome, Player};
use crate::policy::Difficulty;

/// Visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Neon,
    Retro,
    Watercolor,
}

impl Theme {
    /// Themes available from the start.
    pub const BASE: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Neon];

    /// Streak thresholds and the themes they unlock, lowest first.
    pub const UNLOCKS: [(u32, Theme); 2] = [(3, Theme::Retro), (5, Theme::Watercolor)];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Neon => "neon",
            Theme::Retro => "retro",
            Theme::Watercolor => "watercolor",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Turn state derived from a [`GameState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingPlayerMove,
    AwaitingComputerMove,
    Won(Player),
    Draw,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }
}

/// Complete game and session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Current game ===
    pub board: Board,

    /// Side whose turn it is. Left unchanged once the game ends.
    pub to_move: Player,

    pub outcome: Outcome,

    /// Plies played this game.
    pub move_count: u32,

    pub difficulty: Difficulty,

    /// A computer move is scheduled and not yet applied or cancelled.
    pub ai_thinking: bool,

    // === Across games ===
    /// Consecutive human wins.
    pub win_streak: u32,

    pub best_streak: u32,

    /// Quickest human win, measured from the start of the first computer turn.
    pub fastest_win: Option<Duration>,

    /// Never shrinks.
    pub unlocked_themes: OrdSet<Theme>,

    // === Preferences ===
    /// Always one of `unlocked_themes`.
    pub theme: Theme,

    pub sound_enabled: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::HUMAN,
            outcome: Outcome::InProgress,
            move_count: 0,
            difficulty: Difficulty::default(),
            ai_thinking: false,
            win_streak: 0,
            best_streak: 0,
            fastest_win: None,
            unlocked_themes: Theme::BASE.iter().copied().collect(),
            theme: Theme::default(),
            sound_enabled: true,
        }
    }
}

impl GameState {
    /// Create the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.outcome {
            Outcome::Won { player, .. } => Phase::Won(player),
            Outcome::Draw => Phase::Draw,
            Outcome::InProgress if self.to_move == Player::COMPUTER => Phase::AwaitingComputerMove,
            Outcome::InProgress => Phase::AwaitingPlayerMove,
        }
    }

    /// In progress with at least one move played.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.outcome == Outcome::InProgress && self.move_count > 0
    }

    #[must_use]
    pub fn is_unlocked(&self, theme: Theme) -> bool {
        self.unlocked_themes.contains(&theme)
    }

    /// Fresh board, keeping streaks, records, unlocks, and preferences.
    #[must_use]
    pub fn with_new_board(&self) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::HUMAN,
            outcome: Outcome::InProgress,
            move_count: 0,
            ai_thinking: false,
            ..self.clone()
        }
    }
}
