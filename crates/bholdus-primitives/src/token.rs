//! `TokenInfo` and `TokenSymbol`, the leaves of every currency identifier.

use crate::codec::{impl_scale_decode, read_discriminant, read_primitive, TypedCodec};
use crate::error::CodecError;
use parity_scale_codec::{Encode, EncodeLike, Input, MaxEncodedLen, Output};
use serde::{Deserialize, Serialize};
use std::fmt;

const NATIVE: u8 = 0;
const TOKEN: u8 = 1;

/// Index of a non-native token registered in the `Tokens` pallet.
/// Encoded as a fixed-width little-endian `u32`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Encode,
    MaxEncodedLen,
)]
#[serde(transparent)]
pub struct TokenInfo {
    pub id: u32,
}

impl TokenInfo {
    pub const fn new(id: u32) -> Self {
        Self { id }
    }
}

impl From<u32> for TokenInfo {
    fn from(id: u32) -> Self {
        Self { id }
    }
}

impl fmt::Display for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl TypedCodec for TokenInfo {
    const TYPE_NAME: &'static str = "TokenInfo";

    fn decode_from<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let id: u32 = read_primitive(input, Self::TYPE_NAME)?;
        Ok(Self { id })
    }
}

/// A token symbol: the chain's native asset or an indexed token.
///
/// | discriminant | variant | payload     |
/// |--------------|---------|-------------|
/// | `0x00`       | Native  | none        |
/// | `0x01`       | Token   | `TokenInfo` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenSymbol {
    Native,
    Token(TokenInfo),
}

impl TokenSymbol {
    /// Shorthand for `TokenSymbol::Token(TokenInfo::new(id))`.
    pub const fn token(id: u32) -> Self {
        TokenSymbol::Token(TokenInfo::new(id))
    }

    pub fn is_native(&self) -> bool {
        matches!(self, TokenSymbol::Native)
    }

    /// The token index, or `None` for the native asset.
    pub fn token_id(&self) -> Option<u32> {
        match self {
            TokenSymbol::Native => None,
            TokenSymbol::Token(info) => Some(info.id),
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            TokenSymbol::Native => NATIVE,
            TokenSymbol::Token(_) => TOKEN,
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSymbol::Native => write!(f, "native"),
            TokenSymbol::Token(info) => write!(f, "token:{info}"),
        }
    }
}

impl TypedCodec for TokenSymbol {
    const TYPE_NAME: &'static str = "TokenSymbol";

    fn decode_from<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        match read_discriminant(input, Self::TYPE_NAME)? {
            NATIVE => Ok(TokenSymbol::Native),
            TOKEN => Ok(TokenSymbol::Token(TokenInfo::decode_from(input)?)),
            byte => Err(CodecError::UnknownDiscriminant {
                ty: Self::TYPE_NAME,
                byte,
            }),
        }
    }
}

impl Encode for TokenSymbol {
    fn size_hint(&self) -> usize {
        match self {
            TokenSymbol::Native => 1,
            TokenSymbol::Token(info) => 1 + info.size_hint(),
        }
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        dest.push_byte(self.discriminant());
        if let TokenSymbol::Token(info) = self {
            info.encode_to(dest);
        }
    }
}

impl EncodeLike for TokenSymbol {}

impl MaxEncodedLen for TokenSymbol {
    fn max_encoded_len() -> usize {
        1 + TokenInfo::max_encoded_len()
    }
}

impl_scale_decode!(TokenInfo, TokenSymbol);

#[cfg(test)]
mod tests {
    use super::*;
    use parity_scale_codec::Decode;

    #[test]
    fn native_is_single_byte() {
        assert_eq!(TokenSymbol::Native.encode(), vec![0x00]);
        assert_eq!(TokenSymbol::decode_bytes(&[0x00]).unwrap(), TokenSymbol::Native);
    }

    #[test]
    fn token_payload_is_u32_le() {
        let sym = TokenSymbol::token(0x0102_0304);
        assert_eq!(sym.encode(), vec![0x01, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(sym.size_hint(), 5);
    }

    #[test]
    fn token_index_boundaries_round_trip() {
        for id in [0u32, 1, 7, u32::MAX] {
            let sym = TokenSymbol::token(id);
            let back = TokenSymbol::decode_bytes(&sym.encode()).unwrap();
            assert_eq!(back, sym);
            assert_eq!(back.token_id(), Some(id));
        }
    }

    #[test]
    fn unknown_discriminant_consumes_one_byte() {
        let mut input: &[u8] = &[0x02, 0xaa, 0xbb];
        let err = TokenSymbol::decode_from(&mut input).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnknownDiscriminant { ty: "TokenSymbol", byte: 0x02 }
        ));
        assert_eq!(input, &[0xaa, 0xbb]);
    }

    #[test]
    fn truncated_token_payload() {
        let err = TokenSymbol::decode_bytes(&[0x01, 0x07, 0x00]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::TruncatedStream { ty: "TokenInfo", .. }
        ));
    }

    #[test]
    fn scale_decode_trait_delegates() {
        let sym = TokenSymbol::decode(&mut &[0x01, 0x2a, 0, 0, 0][..]).unwrap();
        assert_eq!(sym, TokenSymbol::token(42));
        assert!(TokenSymbol::decode(&mut &[0x09][..]).is_err());
    }

    #[test]
    fn max_encoded_len() {
        assert_eq!(TokenSymbol::max_encoded_len(), 5);
    }

    #[test]
    fn serde_shape() {
        assert_eq!(serde_json::to_string(&TokenSymbol::Native).unwrap(), "\"native\"");
        assert_eq!(
            serde_json::to_string(&TokenSymbol::token(7)).unwrap(),
            r#"{"token":7}"#
        );
        let back: TokenSymbol = serde_json::from_str(r#"{"token":7}"#).unwrap();
        assert_eq!(back, TokenSymbol::token(7));
    }

    #[test]
    fn display() {
        assert_eq!(TokenSymbol::Native.to_string(), "native");
        assert_eq!(TokenSymbol::token(3).to_string(), "token:3");
    }
}
