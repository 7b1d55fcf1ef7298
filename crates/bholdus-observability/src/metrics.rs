//! Event decoding metrics.
//!
//! All metrics use OpenTelemetry conventions and are recorded against
//! whichever meter provider the host application installs.

use bholdus_events::{BlockDecodeResult, EventError};
use opentelemetry::{
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};

/// Central metrics handle for event decoding.
#[derive(Clone)]
pub struct DecodeMetrics {
    pub events_decoded: Counter<u64>,
    pub events_skipped: Counter<u64>,
    pub decode_errors: Counter<u64>,
    pub block_size: Histogram<u64>,
}

impl DecodeMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            events_decoded: meter
                .u64_counter("bholdus.events_decoded")
                .with_description("Total number of successfully decoded events")
                .init(),
            events_skipped: meter
                .u64_counter("bholdus.events_skipped")
                .with_description("Events dropped as unknown or undecodable")
                .init(),
            decode_errors: meter
                .u64_counter("bholdus.decode_errors")
                .with_description("Events that failed to decode")
                .init(),
            block_size: meter
                .u64_histogram("bholdus.block_size")
                .with_description("Number of raw events in a decoded block")
                .init(),
        }
    }

    pub fn record_decoded(&self, pallet: &'static str, event: &'static str, count: u64) {
        self.events_decoded.add(
            count,
            &[KeyValue::new("pallet", pallet), KeyValue::new("event", event)],
        );
    }

    pub fn record_skipped(&self, reason: &'static str, count: u64) {
        if count > 0 {
            self.events_skipped
                .add(count, &[KeyValue::new("reason", reason)]);
        }
    }

    pub fn record_error(&self, err: &EventError) {
        self.decode_errors
            .add(1, &[KeyValue::new("error_type", error_type(err))]);
    }

    /// Record everything one block produced.
    pub fn record_block(&self, block: &BlockDecodeResult) {
        let result = &block.result;
        for (kind, count) in result.events.summary() {
            self.record_decoded(kind.pallet(), kind.name(), count as u64);
        }
        self.record_skipped("unknown", result.ignored as u64);
        self.record_skipped("undecodable", result.skipped as u64);
        for (_, err) in &result.errors {
            self.record_error(err);
        }

        let raw = result.events.len() + result.errors.len() + result.ignored + result.skipped;
        self.block_size.record(raw as u64, &[]);
    }
}

fn error_type(err: &EventError) -> &'static str {
    match err {
        EventError::UnknownEvent { .. } => "unknown_event",
        EventError::RecordDecodeFailed { .. } => "record_decode_failed",
    }
}
