//! Snapshot encodings.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wire format for persisted snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotCodec {
    /// Human-readable JSON.
    #[default]
    Json,
    /// Compact binary via bincode.
    Bincode,
}

impl SnapshotCodec {
    pub fn encode<T: Serialize>(self, value: &T) -> Result<Vec<u8>> {
        match self {
            SnapshotCodec::Json => serde_json::to_vec(value).map_err(|e| encode_error("JSON", e)),
            SnapshotCodec::Bincode => bincode::serialize(value).map_err(|e| encode_error("bincode", e)),
        }
    }

    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T> {
        match self {
            SnapshotCodec::Json => serde_json::from_slice(bytes).map_err(|e| decode_error("JSON", e)),
            SnapshotCodec::Bincode => bincode::deserialize(bytes).map_err(|e| decode_error("bincode", e)),
        }
    }
}

fn encode_error(format: &str, err: impl std::fmt::Display) -> Error {
    Error::Persistence {
        operation: format!("encode snapshot as {format}"),
        message: err.to_string(),
    }
}

fn decode_error(format: &str, err: impl std::fmt::Display) -> Error {
    Error::Persistence {
        operation: format!("decode {format} snapshot"),
        message: err.to_string(),
    }
}
