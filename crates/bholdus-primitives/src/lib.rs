//! # bholdus-primitives
//!
//! SCALE codec for the sum-typed identifiers of the Bholdus runtime.
//!
//! ## Wire format
//! Every union is `<discriminant: u8><payload>`, nested without padding or
//! length prefixes. Each type has its own discriminant table:
//!
//! | Type          | `0x00`                | `0x01`                     |
//! |---------------|-----------------------|----------------------------|
//! | `TokenSymbol` | `Native`              | `Token(TokenInfo)`         |
//! | `DexShare`    | `Token(TokenSymbol)`  | (none)                     |
//! | `CurrencyId`  | `Token(TokenSymbol)`  | `DexShare(DexShare, DexShare)` |
//!
//! `TokenInfo` is a little-endian `u32`.
//!
//! ## Entry points
//! Use [`TypedCodec`] for typed errors ([`CodecError`]); the plain
//! `parity_scale_codec::{Encode, Decode}` impls exist so identifiers can be
//! embedded in derived event records.

pub mod asset;
pub mod codec;
pub mod currency;
pub mod error;
pub mod runtime;
pub mod token;

pub use asset::{AssetId, Erc721Token, RegistryId, TokenId};
pub use codec::{parse_hex, TypedCodec};
pub use currency::{CurrencyId, DexShare, TradingPair};
pub use error::CodecError;
pub use runtime::{
    AccountId32, Amount, ArithmeticError, Balance, DispatchError, DispatchResult, Phase,
    ResourceId, TokenError, H256,
};
pub use token::{TokenInfo, TokenSymbol};

// Re-exported so downstream crates derive against the same SCALE version.
pub use parity_scale_codec;
