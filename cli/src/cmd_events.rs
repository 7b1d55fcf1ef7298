//! `bholdus events`: decode a file of demultiplexed block events.
//!
//! Input format (JSON or YAML), one block or a list:
//! ```json
//! [{
//!   "blockNumber": 100,
//!   "events": [
//!     { "pallet": "Currencies", "event": "Deposited",
//!       "phase": { "applyExtrinsic": 1 }, "data": "0x0001070000...", "topics": [] }
//!   ]
//! }]
//! ```
//! A `{ "blocks": [...] }` wrapper, as used by the bundled fixtures, is also
//! accepted; its other keys are ignored.

use anyhow::{Context, Result};
use bholdus_events::{
    decode_blocks, merge_blocks, BlockEvents, DecodeConfig, ErrorMode, Events, ProgressCallback,
};
use bholdus_observability::DecodeMetrics;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct EventsArgs {
    pub file: PathBuf,
    pub config: Option<PathBuf>,
    pub mode: Option<ErrorMode>,
    pub sequential: bool,
    pub summary_only: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BlocksFile {
    Many(Vec<BlockEvents>),
    Wrapped { blocks: Vec<BlockEvents> },
    One(BlockEvents),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorReport {
    block_number: u64,
    index: usize,
    error: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    blocks: usize,
    summary: IndexMap<String, usize>,
    ignored: usize,
    skipped: usize,
    errors: Vec<ErrorReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<Events>,
}

pub fn run(args: EventsArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => DecodeConfig::from_path(path)
            .with_context(|| format!("load decode config '{}'", path.display()))?,
        None => DecodeConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.error_mode = mode;
    }
    if args.sequential {
        config.parallel = false;
    }

    let blocks = load_blocks(&args.file)?;
    let report = decode_report(&blocks, &config, args.summary_only)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_blocks(path: &Path) -> Result<Vec<BlockEvents>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read events file '{}'", path.display()))?;
    let parsed: BlocksFile = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).context("parse events YAML")?,
        _ => serde_json::from_str(&text).context("parse events JSON")?,
    };
    Ok(match parsed {
        BlocksFile::Many(blocks) | BlocksFile::Wrapped { blocks } => blocks,
        BlocksFile::One(block) => vec![block],
    })
}

fn decode_report(blocks: &[BlockEvents], config: &DecodeConfig, summary_only: bool) -> Result<Report> {
    let metrics = DecodeMetrics::new(&opentelemetry::global::meter("bholdus"));
    let progress = |done: usize, total: usize| debug!(done, total, "blocks decoded");

    let results = decode_blocks(blocks, config, Some(&progress as &dyn ProgressCallback))?;

    let mut ignored = 0;
    let mut skipped = 0;
    let mut errors = Vec::new();
    for block in &results {
        metrics.record_block(block);
        ignored += block.result.ignored;
        skipped += block.result.skipped;
        for (index, err) in &block.result.errors {
            errors.push(ErrorReport {
                block_number: block.block_number,
                index: *index,
                error: err.to_string(),
            });
        }
    }

    let events = merge_blocks(results);
    let summary = events
        .summary()
        .into_iter()
        .map(|(kind, n)| (kind.to_string(), n))
        .collect();

    Ok(Report {
        blocks: blocks.len(),
        summary,
        ignored,
        skipped,
        errors,
        events: (!summary_only).then_some(events),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures/substrate/events.json")
    }

    #[test]
    fn fixture_report() {
        let blocks = load_blocks(&fixture()).unwrap();

        let config = DecodeConfig {
            error_mode: ErrorMode::Collect,
            ..DecodeConfig::default()
        };
        let report = decode_report(&blocks, &config, true).unwrap();
        assert_eq!(report.blocks, 2);
        assert_eq!(report.ignored, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].block_number, 101);
        assert!(report.events.is_none());
        assert_eq!(report.summary.get("Dex.Swap"), Some(&1));
    }

    #[test]
    fn single_block_file_is_accepted() {
        let path = std::env::temp_dir().join(format!("bholdus-cli-block-{}.yaml", std::process::id()));
        std::fs::write(
            &path,
            "blockNumber: 7\nevents:\n  - pallet: Staking\n    event: StakingElection\n    data: \"0x\"\n",
        )
        .unwrap();
        let blocks = load_blocks(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].block_number, 7);
    }
}
