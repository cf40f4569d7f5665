//! Difficulty tiers and their selection parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty tier, ordered from weakest to strongest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Optimus,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Optimus,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Optimus => "optimus",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selection parameters for one tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierSettings {
    /// Search depth in plies (9 searches the whole remaining game).
    pub depth: u8,

    /// Chance of replacing the search result with a random empty cell.
    pub random_move_probability: f64,

    /// Play a random cell on the first two plies instead of searching.
    pub randomize_opening: bool,

    /// Consult the opening book before searching.
    ///
    /// Tiers with the book never randomize the opening.
    pub opening_book: bool,
}

impl TierSettings {
    /// Plain search with no randomness and no book.
    #[must_use]
    pub const fn search_only(depth: u8) -> Self {
        Self {
            depth,
            random_move_probability: 0.0,
            randomize_opening: false,
            opening_book: false,
        }
    }

    #[must_use]
    pub fn with_random_move_probability(mut self, probability: f64) -> Self {
        self.random_move_probability = probability;
        self
    }

    #[must_use]
    pub fn with_randomized_opening(mut self) -> Self {
        self.randomize_opening = true;
        self
    }

    #[must_use]
    pub fn with_opening_book(mut self) -> Self {
        self.opening_book = true;
        self
    }

    /// Strip every random element except the opening book's corner pick.
    #[must_use]
    pub fn without_randomness(mut self) -> Self {
        self.random_move_probability = 0.0;
        self.randomize_opening = false;
        self
    }
}

/// Selection parameters for every tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub easy: TierSettings,
    pub medium: TierSettings,
    pub hard: TierSettings,
    pub optimus: TierSettings,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            easy: TierSettings::search_only(2)
                .with_random_move_probability(0.2)
                .with_randomized_opening(),
            medium: TierSettings::search_only(6)
                .with_random_move_probability(0.1)
                .with_randomized_opening(),
            hard: TierSettings::search_only(9).with_randomized_opening(),
            optimus: TierSettings::search_only(9).with_opening_book(),
        }
    }
}

impl PolicyConfig {
    /// Settings for a tier.
    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> &TierSettings {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
            Difficulty::Optimus => &self.optimus,
        }
    }

    /// Replace the settings for one tier.
    #[must_use]
    pub fn with_tier(mut self, difficulty: Difficulty, settings: TierSettings) -> Self {
        match difficulty {
            Difficulty::Easy => self.easy = settings,
            Difficulty::Medium => self.medium = settings,
            Difficulty::Hard => self.hard = settings,
            Difficulty::Optimus => self.optimus = settings,
        }
        self
    }

    /// Same depths and book, no injected random moves.
    #[must_use]
    pub fn without_randomness(self) -> Self {
        Self {
            easy: self.easy.without_randomness(),
            medium: self.medium.without_randomness(),
            hard: self.hard.without_randomness(),
            optimus: self.optimus.without_randomness(),
        }
    }
}
