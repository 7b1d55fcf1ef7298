//! `DexShare`, `CurrencyId` and `TradingPair`.

use crate::codec::{impl_scale_decode, read_discriminant, TypedCodec};
use crate::error::CodecError;
use crate::token::TokenSymbol;
use parity_scale_codec::{Encode, EncodeLike, Input, MaxEncodedLen, Output};
use serde::{Deserialize, Serialize};
use std::fmt;

const DEX_SHARE_TOKEN: u8 = 0;

const CURRENCY_TOKEN: u8 = 0;
const CURRENCY_DEX_SHARE: u8 = 1;

/// One side of a liquidity-pool share.
///
/// Only `Token` exists; it still carries a discriminant byte (`0x00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DexShare {
    Token(TokenSymbol),
}

impl DexShare {
    pub fn symbol(&self) -> TokenSymbol {
        match self {
            DexShare::Token(symbol) => *symbol,
        }
    }
}

impl From<TokenSymbol> for DexShare {
    fn from(symbol: TokenSymbol) -> Self {
        DexShare::Token(symbol)
    }
}

impl fmt::Display for DexShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DexShare::Token(symbol) => write!(f, "{symbol}"),
        }
    }
}

impl TypedCodec for DexShare {
    const TYPE_NAME: &'static str = "DexShare";

    fn decode_from<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        match read_discriminant(input, Self::TYPE_NAME)? {
            DEX_SHARE_TOKEN => Ok(DexShare::Token(TokenSymbol::decode_from(input)?)),
            byte => Err(CodecError::UnknownDiscriminant {
                ty: Self::TYPE_NAME,
                byte,
            }),
        }
    }
}

impl Encode for DexShare {
    fn size_hint(&self) -> usize {
        match self {
            DexShare::Token(symbol) => 1 + symbol.size_hint(),
        }
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        match self {
            DexShare::Token(symbol) => {
                dest.push_byte(DEX_SHARE_TOKEN);
                symbol.encode_to(dest);
            }
        }
    }
}

impl EncodeLike for DexShare {}

impl MaxEncodedLen for DexShare {
    fn max_encoded_len() -> usize {
        1 + TokenSymbol::max_encoded_len()
    }
}

/// A currency identifier: a plain token, or the LP share of a two-sided pool.
///
/// | discriminant | variant  | payload                      |
/// |--------------|----------|------------------------------|
/// | `0x00`       | Token    | `TokenSymbol`                |
/// | `0x01`       | DexShare | `DexShare`, then `DexShare`  |
///
/// The two shares are kept in emission order; `(a, b)` and `(b, a)` are
/// different pools on the wire and here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyId {
    Token(TokenSymbol),
    DexShare(DexShare, DexShare),
}

impl CurrencyId {
    pub const fn native() -> Self {
        CurrencyId::Token(TokenSymbol::Native)
    }

    pub const fn token(id: u32) -> Self {
        CurrencyId::Token(TokenSymbol::token(id))
    }

    /// LP share of the pool `share1`/`share2`, in that order.
    pub fn dex_share(share1: impl Into<DexShare>, share2: impl Into<DexShare>) -> Self {
        CurrencyId::DexShare(share1.into(), share2.into())
    }

    pub fn is_dex_share(&self) -> bool {
        matches!(self, CurrencyId::DexShare(..))
    }

    /// Underlying token symbols: one for a token, two for a dex share.
    pub fn token_symbols(&self) -> Vec<TokenSymbol> {
        match self {
            CurrencyId::Token(symbol) => vec![*symbol],
            CurrencyId::DexShare(share1, share2) => vec![share1.symbol(), share2.symbol()],
        }
    }
}

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyId::Token(symbol) => write!(f, "{symbol}"),
            CurrencyId::DexShare(share1, share2) => write!(f, "lp({share1},{share2})"),
        }
    }
}

impl TypedCodec for CurrencyId {
    const TYPE_NAME: &'static str = "CurrencyId";

    fn decode_from<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        match read_discriminant(input, Self::TYPE_NAME)? {
            CURRENCY_TOKEN => Ok(CurrencyId::Token(TokenSymbol::decode_from(input)?)),
            CURRENCY_DEX_SHARE => {
                let share1 = DexShare::decode_from(input)?;
                let share2 = DexShare::decode_from(input)?;
                Ok(CurrencyId::DexShare(share1, share2))
            }
            byte => Err(CodecError::UnknownDiscriminant {
                ty: Self::TYPE_NAME,
                byte,
            }),
        }
    }
}

impl Encode for CurrencyId {
    fn size_hint(&self) -> usize {
        match self {
            CurrencyId::Token(symbol) => 1 + symbol.size_hint(),
            CurrencyId::DexShare(share1, share2) => 1 + share1.size_hint() + share2.size_hint(),
        }
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        match self {
            CurrencyId::Token(symbol) => {
                dest.push_byte(CURRENCY_TOKEN);
                symbol.encode_to(dest);
            }
            CurrencyId::DexShare(share1, share2) => {
                dest.push_byte(CURRENCY_DEX_SHARE);
                share1.encode_to(dest);
                share2.encode_to(dest);
            }
        }
    }
}

impl EncodeLike for CurrencyId {}

impl MaxEncodedLen for CurrencyId {
    fn max_encoded_len() -> usize {
        let token = TokenSymbol::max_encoded_len();
        let dex_share = 2 * DexShare::max_encoded_len();
        1 + token.max(dex_share)
    }
}

/// An ordered pair of currencies identifying a DEX pool.
/// Not canonicalized: the runtime decides the order and it is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPair {
    pub currency_0: CurrencyId,
    pub currency_1: CurrencyId,
}

impl TradingPair {
    pub fn new(currency_0: CurrencyId, currency_1: CurrencyId) -> Self {
        Self {
            currency_0,
            currency_1,
        }
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.currency_0, self.currency_1)
    }
}

impl TypedCodec for TradingPair {
    const TYPE_NAME: &'static str = "TradingPair";

    fn decode_from<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let currency_0 = CurrencyId::decode_from(input)
            .map_err(|e| e.in_field(Self::TYPE_NAME, "currency_0"))?;
        let currency_1 = CurrencyId::decode_from(input)
            .map_err(|e| e.in_field(Self::TYPE_NAME, "currency_1"))?;
        Ok(Self {
            currency_0,
            currency_1,
        })
    }
}

impl Encode for TradingPair {
    fn size_hint(&self) -> usize {
        self.currency_0.size_hint() + self.currency_1.size_hint()
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        self.currency_0.encode_to(dest);
        self.currency_1.encode_to(dest);
    }
}

impl EncodeLike for TradingPair {}

impl MaxEncodedLen for TradingPair {
    fn max_encoded_len() -> usize {
        2 * CurrencyId::max_encoded_len()
    }
}

impl_scale_decode!(DexShare, CurrencyId, TradingPair);
