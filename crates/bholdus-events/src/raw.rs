//! Demultiplexed, still-undecoded events: the input to the aggregate.

use bholdus_primitives::{Phase, H256};
use serde::{Deserialize, Serialize};

/// One event as split out of a block's event log by the chain-event
/// demultiplexer: its names, phase, topics, and the SCALE bytes of its
/// argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub pallet: String,
    pub event: String,
    #[serde(default)]
    pub phase: Phase,
    /// SCALE-encoded arguments, hex with `0x` prefix in JSON.
    #[serde(with = "bholdus_primitives::codec::hex_vec")]
    pub data: Vec<u8>,
    #[serde(default)]
    pub topics: Vec<H256>,
}

impl RawEvent {
    pub fn new(pallet: impl Into<String>, event: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            pallet: pallet.into(),
            event: event.into(),
            phase: Phase::default(),
            data,
            topics: Vec::new(),
        }
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }
}

/// All events of one block, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockEvents {
    pub block_number: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<H256>,
    pub events: Vec<RawEvent>,
}
