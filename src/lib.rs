//! # tictactoe-engine
//!
//! Decision and outcome engine for tic-tac-toe: a human (X) against a
//! computer opponent (O) at four difficulty tiers.
//!
//! ## Architecture
//!
//! - **Value types at the bottom**: `Board` is a `Copy` array of nine cells.
//!   Outcome evaluation, search, and move selection are pure functions of it.
//!
//! - **Deterministic randomness**: every random choice goes through a seeded
//!   `GameRng`, so a seed reproduces a whole game.
//!
//! - **Single writer**: `GameController` owns the canonical `GameState`.
//!   Computer moves are scheduled against a version and discarded if the
//!   state moves on before they resolve.
//!
//! ## Modules
//!
//! - `core`: Board, players, outcome evaluation, RNG
//! - `search`: Depth-limited alpha-beta and its unpruned reference
//! - `policy`: Difficulty tiers and move selection
//! - `game`: Game state, configuration, and the turn controller
//! - `persistence`: Snapshot stores and codecs
//! - `session`: Controller wired to a store and an effect sink
//! - `error`: Crate error type

pub mod core;
pub mod error;
pub mod game;
pub mod persistence;
pub mod policy;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    evaluate, empty_cells, winning_moves,
    Board, Cell, Player, Outcome, WinLine, GameRng,
    CELL_COUNT, WINNING_LINES,
};

pub use crate::error::{Error, Result};

pub use crate::search::{best_move, minimax, search, Score, SearchResult, SearchStats};

pub use crate::policy::{select_move, select_with, Difficulty, PolicyConfig, Selection, SelectionReason, TierSettings};

pub use crate::game::{
    GameConfig, GameController, GameEvent, GameState,
    PendingMove, Phase, Theme, Transition,
};

pub use crate::persistence::{FileStore, MemoryStore, Persistence, SnapshotCodec, SnapshotStore};

pub use crate::session::{EffectSink, NoEffects, Session};
