//! # bholdus-observability
//!
//! Structured logging and OpenTelemetry metrics for event decoding.
//!
//! ## Built-in metrics
//! - `bholdus.events_decoded`: counter, tagged with pallet + event
//! - `bholdus.events_skipped`: counter, tagged with reason
//! - `bholdus.decode_errors`: counter, tagged with error_type
//! - `bholdus.block_size`: histogram of raw events per block
//!
//! ## Structured logging
//! Text or JSON logs through `tracing-subscriber`, with per-component levels.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::DecodeMetrics;
pub use tracing_setup::{init_tracing, LogConfig};
