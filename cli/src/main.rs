//! Bholdus CLI: inspect SCALE identifiers and decode runtime events.
//!
//! # Commands
//! ```text
//! bholdus decode  <type> <hex>
//! bholdus encode  <type> <json>
//! bholdus events  --file <blocks.json> [--config <decode.yaml>] [--mode collect]
//! bholdus test    --fixtures <dir>
//! bholdus methods
//! bholdus info
//! ```

use anyhow::{Context, Result};
use bholdus_events::{ErrorMode, EventKind, Method};
use bholdus_observability::{init_tracing, LogConfig};
use bholdus_primitives::TypedCodec;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use std::path::PathBuf;

mod cmd_events;

#[derive(Parser)]
#[command(
    name = "bholdus",
    about = "Bholdus runtime codec: identifiers, events, and bridge calls",
    long_about = "
Decode and encode the SCALE-encoded identifiers of the Bholdus runtime
(CurrencyId, DexShare, TokenSymbol, TradingPair, AssetId, ...) and decode
demultiplexed block events into typed records.

Logs go to stderr. Set RUST_LOG-style levels with --log-level.
",
    version
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level: trace | debug | info | warn | error
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit JSON structured logs
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a hex-encoded identifier and print it as JSON
    Decode {
        #[arg(value_enum)]
        ty: IdentType,
        /// SCALE bytes, hex with optional 0x prefix
        hex: String,
    },

    /// Encode a JSON identifier and print the hex bytes
    Encode {
        #[arg(value_enum)]
        ty: IdentType,
        /// JSON value, e.g. '{"dexShare":[{"token":"native"},{"token":{"token":7}}]}'
        json: String,
    },

    /// Decode a file of demultiplexed block events
    Events {
        /// JSON or YAML file with one block or a list of blocks
        #[arg(short, long)]
        file: PathBuf,
        /// Decode options file (.yaml/.yml or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the error mode from the config
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Decode blocks one after another instead of on the rayon pool
        #[arg(long)]
        sequential: bool,
        /// Print only counts, not the decoded records
        #[arg(long)]
        summary: bool,
    },

    /// Run identifier golden fixtures
    Test {
        /// Directory containing fixture JSON files
        #[arg(long, default_value = "./fixtures/substrate")]
        fixtures: PathBuf,
    },

    /// List the extrinsic calls the relayer submits
    Methods,

    /// Show build and catalogue info
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Skip,
    Collect,
    Throw,
}

impl From<ModeArg> for ErrorMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Skip => ErrorMode::Skip,
            ModeArg::Collect => ErrorMode::Collect,
            ModeArg::Throw => ErrorMode::Throw,
        }
    }
}

/// Identifier types addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum IdentType {
    CurrencyId,
    DexShare,
    TokenSymbol,
    TokenInfo,
    TradingPair,
    AssetId,
    RegistryId,
    TokenId,
    AccountId,
    H256,
    ResourceId,
}

impl IdentType {
    /// Resolve a Rust type name as used in fixture files, e.g. `"CurrencyId"`.
    pub(crate) fn from_type_name(name: &str) -> Option<Self> {
        Some(match name {
            "CurrencyId" => Self::CurrencyId,
            "DexShare" => Self::DexShare,
            "TokenSymbol" => Self::TokenSymbol,
            "TokenInfo" => Self::TokenInfo,
            "TradingPair" => Self::TradingPair,
            "AssetId" => Self::AssetId,
            "RegistryId" => Self::RegistryId,
            "TokenId" => Self::TokenId,
            "AccountId32" => Self::AccountId,
            "H256" => Self::H256,
            "ResourceId" => Self::ResourceId,
            _ => return None,
        })
    }
}

/// Call a generic function with the concrete type behind an [`IdentType`].
macro_rules! with_ident_type {
    ($ty:expr, $f:ident($($arg:expr),*)) => {
        match $ty {
            $crate::IdentType::CurrencyId => $f::<::bholdus_primitives::CurrencyId>($($arg),*),
            $crate::IdentType::DexShare => $f::<::bholdus_primitives::DexShare>($($arg),*),
            $crate::IdentType::TokenSymbol => $f::<::bholdus_primitives::TokenSymbol>($($arg),*),
            $crate::IdentType::TokenInfo => $f::<::bholdus_primitives::TokenInfo>($($arg),*),
            $crate::IdentType::TradingPair => $f::<::bholdus_primitives::TradingPair>($($arg),*),
            $crate::IdentType::AssetId => $f::<::bholdus_primitives::AssetId>($($arg),*),
            $crate::IdentType::RegistryId => $f::<::bholdus_primitives::RegistryId>($($arg),*),
            $crate::IdentType::TokenId => $f::<::bholdus_primitives::TokenId>($($arg),*),
            $crate::IdentType::AccountId => $f::<::bholdus_primitives::AccountId32>($($arg),*),
            $crate::IdentType::H256 => $f::<::bholdus_primitives::H256>($($arg),*),
            $crate::IdentType::ResourceId => $f::<::bholdus_primitives::ResourceId>($($arg),*),
        }
    };
}
pub(crate) use with_ident_type;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&LogConfig {
        level: if cli.verbose {
            "debug".into()
        } else {
            cli.log_level.clone()
        },
        json: cli.json_logs,
        ..LogConfig::default()
    });

    match cli.command {
        Commands::Decode { ty, hex } => {
            let value = with_ident_type!(ty, decode_value(&hex))?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }

        Commands::Encode { ty, json } => {
            let hex = with_ident_type!(ty, encode_value(&json))?;
            println!("{hex}");
            Ok(())
        }

        Commands::Events {
            file,
            config,
            mode,
            sequential,
            summary,
        } => cmd_events::run(cmd_events::EventsArgs {
            file,
            config,
            mode: mode.map(ErrorMode::from),
            sequential,
            summary_only: summary,
        }),

        Commands::Test { fixtures } => cmd_test::run(&fixtures),

        Commands::Methods => cmd_methods(),

        Commands::Info => cmd_info(),
    }
}

// ─── Command implementations ─────────────────────────────────────────────────

fn decode_value<T>(hex: &str) -> Result<serde_json::Value>
where
    T: TypedCodec + Serialize + Display,
{
    let value = T::decode_hex(hex).with_context(|| format!("decode {}", T::TYPE_NAME))?;
    Ok(serde_json::json!({
        "type": T::TYPE_NAME,
        "value": value,
        "display": value.to_string(),
        "encodedLen": value.encode().len(),
    }))
}

fn encode_value<T>(json: &str) -> Result<String>
where
    T: TypedCodec + DeserializeOwned,
{
    let value: T = serde_json::from_str(json)
        .with_context(|| format!("parse {} JSON", T::TYPE_NAME))?;
    Ok(value.encode_hex())
}

fn cmd_methods() -> Result<()> {
    for method in Method::ALL {
        println!("{method}");
    }
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("Bholdus codec v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Identifiers (SCALE, one-byte discriminants):");
    println!("  TokenSymbol   0x00 Native | 0x01 Token(u32 LE)");
    println!("  DexShare      0x00 Token(TokenSymbol)");
    println!("  CurrencyId    0x00 Token(TokenSymbol) | 0x01 DexShare(DexShare, DexShare)");
    println!("  TradingPair   CurrencyId ++ CurrencyId");
    println!("  AssetId       H160 registry ++ U256 token (32 bytes LE)");
    println!();

    let mut pallets: Vec<&str> = EventKind::ALL.iter().map(|k| k.pallet()).collect();
    pallets.dedup();
    println!("Event catalogue: {} kinds", EventKind::ALL.len());
    for pallet in pallets {
        let names: Vec<&str> = EventKind::ALL
            .iter()
            .filter(|k| k.pallet() == pallet)
            .map(|k| k.name())
            .collect();
        println!("  {:28} {}", pallet, names.join(", "));
    }
    Ok(())
}
