//! Error types for the engine.
//!
//! Nothing here is fatal to a running game. Board and selection errors
//! flag precondition violations, illegal moves are downgraded to no-ops by
//! the controller, and persistence errors are absorbed by
//! [`Persistence`](crate::persistence::Persistence).

use thiserror::Error;

/// Main error type for the engine.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board: expected 9 cells, got {len}")]
    InvalidBoard { len: usize },

    #[error("invalid cell character '{character}' at position {position}")]
    InvalidCell { character: char, position: usize },

    #[error("no legal move: the board has no empty cell")]
    NoLegalMove,

    #[error("illegal move at {index}: {reason}")]
    IllegalMove { index: usize, reason: &'static str },

    #[error("failed to {operation}: {message}")]
    Persistence { operation: String, message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for results using the engine's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
