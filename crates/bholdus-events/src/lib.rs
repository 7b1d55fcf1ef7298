//! # bholdus-events
//!
//! Typed runtime events for the Bholdus chain.
//!
//! A block's event log, once split into [`RawEvent`]s by the chain-event
//! demultiplexer, is decoded here into an [`Events`] aggregate holding one
//! ordered list per [`EventKind`]. Event arguments are SCALE-encoded and
//! reuse the identifier codec from `bholdus-primitives`.
//!
//! ```text
//! RawEvent { pallet, event, phase, data, topics }
//!        │  EventKind::from_names
//!        ▼
//! Events::push ── decode_all(data) ──► Events.<kind>: Vec<EventEntry<Record>>
//! ```

pub mod aggregate;
pub mod batch;
pub mod config;
pub mod error;
pub mod kind;
pub mod methods;
pub mod raw;
pub mod records;

pub use aggregate::{EventEntry, Events};
pub use batch::{
    decode_batch, decode_blocks, merge_blocks, BatchDecodeResult, BlockDecodeResult, ErrorMode,
    ProgressCallback,
};
pub use config::DecodeConfig;
pub use error::{BatchDecodeError, ConfigError, EventError};
pub use kind::EventKind;
pub use methods::{Method, UnknownMethod, BRIDGE_PALLET_NAME, BRIDGE_STORAGE_PREFIX};
pub use raw::{BlockEvents, RawEvent};
