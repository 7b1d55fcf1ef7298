//! Error types for event decoding and configuration.

use crate::kind::EventKind;
use thiserror::Error;

/// Errors that can occur while decoding a single event record.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Unknown event {pallet}.{event}")]
    UnknownEvent { pallet: String, event: String },

    #[error("Failed to decode {kind} record: {reason}")]
    RecordDecodeFailed { kind: EventKind, reason: String },
}

/// Errors that abort a whole batch.
#[derive(Debug, Error)]
pub enum BatchDecodeError {
    #[error("Decode error at index {index}: {source}")]
    ItemFailed {
        index: usize,
        #[source]
        source: EventError,
    },

    #[error("Block {block_number}: {source}")]
    BlockFailed {
        block_number: u64,
        #[source]
        source: Box<BatchDecodeError>,
    },
}

/// Errors from loading a `DecodeConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
