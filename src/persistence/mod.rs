//! Best-effort persistence of [`GameState`] snapshots.
//!
//! `load` never fails: a missing, unreadable, or undecodable snapshot yields
//! the caller's default. `save` never fails either: errors are logged and
//! dropped. The fallible halves are available as `try_load`/`try_save`.

pub mod codec;
pub mod store;

pub use codec::SnapshotCodec;
pub use store::{FileStore, MemoryStore, SnapshotStore};

use tracing::warn;

use crate::error::Result;
use crate::game::GameState;

/// Default key for the game snapshot.
pub const STORAGE_KEY: &str = "tic-tac-toe-game-state";

/// Load/save facade over a [`SnapshotStore`].
#[derive(Clone, Debug, Default)]
pub struct Persistence<S: SnapshotStore> {
    store: S,
    codec: SnapshotCodec,
}

impl<S: SnapshotStore> Persistence<S> {
    /// JSON snapshots in `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            codec: SnapshotCodec::default(),
        }
    }

    #[must_use]
    pub fn with_codec(mut self, codec: SnapshotCodec) -> Self {
        self.codec = codec;
        self
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Snapshot stored under `key`, or `default` if there is none or it
    /// cannot be read.
    pub fn load(&self, key: &str, default: GameState) -> GameState {
        match self.try_load(key) {
            Ok(Some(state)) => state,
            Ok(None) => default,
            Err(err) => {
                warn!(key, %err, "failed to load game state, using default");
                default
            }
        }
    }

    /// Store `state` under `key`, logging any failure.
    pub fn save(&mut self, key: &str, state: &GameState) {
        if let Err(err) = self.try_save(key, state) {
            warn!(key, %err, "failed to save game state");
        }
    }

    pub fn try_load(&self, key: &str) -> Result<Option<GameState>> {
        self.store
            .read(key)?
            .map(|bytes| self.codec.decode(&bytes))
            .transpose()
    }

    pub fn try_save(&mut self, key: &str, state: &GameState) -> Result<()> {
        let bytes = self.codec.encode(state)?;
        self.store.write(key, &bytes)
    }
}
