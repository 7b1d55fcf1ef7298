//! Batch decoding of raw events into an [`Events`] aggregate.
//!
//! A batch is decoded in order. How a failing event is handled depends on
//! [`ErrorMode`]; unknown pallet/event names are counted and ignored when
//! `skip_unknown` is set, independent of the error mode.
//!
//! Blocks are independent of each other, so [`decode_blocks`] fans them out
//! over the rayon pool when `parallel` is set. Output order always matches
//! input order.

use crate::aggregate::Events;
use crate::config::DecodeConfig;
use crate::error::{BatchDecodeError, EventError};
use crate::raw::{BlockEvents, RawEvent};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

/// Progress callback for long-running block decodes.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, decoded: usize, total: usize);
}

impl<F: Fn(usize, usize) + Send + Sync> ProgressCallback for F {
    fn on_progress(&self, decoded: usize, total: usize) {
        self(decoded, total)
    }
}

/// How a batch reacts to an event that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Drop the event with a warning and keep going.
    #[default]
    Skip,
    /// Keep going, and return the failures next to the decoded events.
    Collect,
    /// Abort the batch on the first failure.
    Throw,
}

/// Output of one batch.
#[derive(Debug, Default)]
pub struct BatchDecodeResult {
    pub events: Events,
    /// (index in the batch, error). Populated only by `ErrorMode::Collect`.
    pub errors: Vec<(usize, EventError)>,
    /// Events dropped because their pallet/event names are not in the catalogue.
    pub ignored: usize,
    /// Events dropped by `ErrorMode::Skip`.
    pub skipped: usize,
}

/// Output of one block in [`decode_blocks`].
#[derive(Debug)]
pub struct BlockDecodeResult {
    pub block_number: u64,
    pub result: BatchDecodeResult,
}

/// Decode `raws` in order into a fresh aggregate.
pub fn decode_batch(
    raws: &[RawEvent],
    config: &DecodeConfig,
) -> Result<BatchDecodeResult, BatchDecodeError> {
    let mut result = BatchDecodeResult::default();

    for (index, raw) in raws.iter().enumerate() {
        let err = match result.events.push(raw) {
            Ok(_) => continue,
            Err(EventError::UnknownEvent { pallet, event }) if config.skip_unknown => {
                debug!(index, %pallet, %event, "ignoring event outside the catalogue");
                result.ignored += 1;
                continue;
            }
            Err(err) => err,
        };

        match config.error_mode {
            ErrorMode::Skip => {
                warn!(index, error = %err, "skipping undecodable event");
                result.skipped += 1;
            }
            ErrorMode::Collect => result.errors.push((index, err)),
            ErrorMode::Throw => {
                return Err(BatchDecodeError::ItemFailed { index, source: err });
            }
        }
    }

    Ok(result)
}

/// Decode every block independently.
///
/// In `Throw` mode a failing block aborts the call; with `parallel` set the
/// reported block is one of the failing blocks, not necessarily the first.
pub fn decode_blocks(
    blocks: &[BlockEvents],
    config: &DecodeConfig,
    progress: Option<&dyn ProgressCallback>,
) -> Result<Vec<BlockDecodeResult>, BatchDecodeError> {
    let total = blocks.len();
    let done = AtomicUsize::new(0);
    info!(blocks = total, parallel = config.parallel, "decoding block events");

    let decode_one = |block: &BlockEvents| -> Result<BlockDecodeResult, BatchDecodeError> {
        let result = decode_batch(&block.events, config).map_err(|e| {
            BatchDecodeError::BlockFailed {
                block_number: block.block_number,
                source: Box::new(e),
            }
        })?;
        let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(cb) = progress {
            cb.on_progress(finished, total);
        }
        Ok(BlockDecodeResult {
            block_number: block.block_number,
            result,
        })
    };

    let decoded: Vec<BlockDecodeResult> = if config.parallel {
        blocks.par_iter().map(decode_one).collect::<Result<_, _>>()?
    } else {
        blocks.iter().map(decode_one).collect::<Result<_, _>>()?
    };

    let events: usize = decoded.iter().map(|b| b.result.events.len()).sum();
    let errors: usize = decoded.iter().map(|b| b.result.errors.len()).sum();
    info!(blocks = decoded.len(), events, errors, "block decode complete");

    Ok(decoded)
}

/// Fold per-block results into one aggregate, in block order.
pub fn merge_blocks(results: Vec<BlockDecodeResult>) -> Events {
    let mut events = Events::new();
    for block in results {
        events.merge(block.result.events);
    }
    events
}
