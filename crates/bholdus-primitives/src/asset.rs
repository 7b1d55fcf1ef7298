//! NFT registry identifiers: `RegistryId`, `TokenId` and the composite `AssetId`.

use crate::codec::{fixed_bytes_codec, impl_scale_decode, read_primitive, TypedCodec};
use crate::error::CodecError;
use alloy_primitives::{Address, U256};
use parity_scale_codec::{Decode, Encode, EncodeLike, Input, MaxEncodedLen, Output};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 160-bit opaque registry identifier (`H160` on the runtime side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryId(pub Address);

fixed_bytes_codec!(RegistryId, Address, 20);

impl From<[u8; 20]> for RegistryId {
    fn from(raw: [u8; 20]) -> Self {
        Self(Address::from(raw))
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.as_slice()))
    }
}

/// 256-bit token identifier within a registry (`U256`, 32 bytes little-endian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub U256);

impl From<u64> for TokenId {
    fn from(v: u64) -> Self {
        Self(U256::from(v))
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TypedCodec for TokenId {
    const TYPE_NAME: &'static str = "TokenId";

    fn decode_from<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let raw: [u8; 32] = read_primitive(input, Self::TYPE_NAME)?;
        Ok(Self(U256::from_le_bytes(raw)))
    }
}

impl Encode for TokenId {
    fn size_hint(&self) -> usize {
        32
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        dest.write(&self.0.to_le_bytes::<32>());
    }
}

impl EncodeLike for TokenId {}

impl MaxEncodedLen for TokenId {
    fn max_encoded_len() -> usize {
        32
    }
}

/// Key of an NFT-style asset: the registry it lives in plus its token id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetId {
    pub registry_id: RegistryId,
    pub token_id: TokenId,
}

impl AssetId {
    pub fn new(registry_id: RegistryId, token_id: TokenId) -> Self {
        Self {
            registry_id,
            token_id,
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.registry_id, self.token_id)
    }
}

impl TypedCodec for AssetId {
    const TYPE_NAME: &'static str = "AssetId";

    fn decode_from<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let registry_id = RegistryId::decode_from(input)
            .map_err(|e| e.in_field(Self::TYPE_NAME, "registry_id"))?;
        let token_id =
            TokenId::decode_from(input).map_err(|e| e.in_field(Self::TYPE_NAME, "token_id"))?;
        Ok(Self {
            registry_id,
            token_id,
        })
    }
}

impl Encode for AssetId {
    fn size_hint(&self) -> usize {
        self.registry_id.size_hint() + self.token_id.size_hint()
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        self.registry_id.encode_to(dest);
        self.token_id.encode_to(dest);
    }
}

impl EncodeLike for AssetId {}

impl MaxEncodedLen for AssetId {
    fn max_encoded_len() -> usize {
        RegistryId::max_encoded_len() + TokenId::max_encoded_len()
    }
}

impl_scale_decode!(TokenId, AssetId);

/// ERC-721 token record kept by the `Erc721` pallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct Erc721Token {
    pub id: TokenId,
    #[serde(with = "crate::codec::hex_vec")]
    pub metadata: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_asset() -> AssetId {
        let mut raw = [0u8; 20];
        raw[0] = 0xaa;
        raw[19] = 0x01;
        AssetId::new(RegistryId::from(raw), TokenId::from(0x0102u64))
    }

    #[test]
    fn asset_id_layout() {
        let bytes = sample_asset().encode();
        assert_eq!(bytes.len(), 52);
        assert_eq!(bytes[0], 0xaa);
        assert_eq!(bytes[19], 0x01);
        // token id: little-endian U256
        assert_eq!(&bytes[20..23], &[0x02, 0x01, 0x00]);
        assert!(bytes[22..].iter().all(|b| *b == 0));
        assert_eq!(AssetId::decode_bytes(&bytes).unwrap(), sample_asset());
    }

    #[test]
    fn token_id_max_round_trips() {
        let id = TokenId(U256::MAX);
        let bytes = id.encode();
        assert_eq!(bytes, vec![0xff; 32]);
        assert_eq!(TokenId::decode_bytes(&bytes).unwrap(), id);
    }

    #[test]
    fn truncated_token_id_is_annotated() {
        let mut bytes = sample_asset().encode();
        bytes.truncate(40);
        let err = AssetId::decode_bytes(&bytes).unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(err.field_path(), "AssetId.token_id");
    }

    #[test]
    fn truncated_registry_id_is_annotated() {
        let err = AssetId::decode_bytes(&[0u8; 10]).unwrap_err();
        assert_eq!(err.field_path(), "AssetId.registry_id");
        assert!(matches!(
            err.root_cause(),
            CodecError::TruncatedStream { ty: "RegistryId", .. }
        ));
    }

    #[test]
    fn registry_id_display_is_lower_hex() {
        let id = RegistryId::from([0xab; 20]);
        assert_eq!(id.to_string(), format!("0x{}", "ab".repeat(20)));
    }

    #[test]
    fn max_encoded_len() {
        assert_eq!(AssetId::max_encoded_len(), 52);
    }

    #[test]
    fn erc721_token_layout() {
        let token = Erc721Token {
            id: TokenId::from(5),
            metadata: b"ipfs".to_vec(),
        };
        let bytes = token.encode();
        // 32-byte id, compact(4) = 0x10, then the bytes
        assert_eq!(bytes.len(), 32 + 1 + 4);
        assert_eq!(bytes[0], 5);
        assert_eq!(bytes[32], 0x10);
        assert_eq!(Erc721Token::decode(&mut &bytes[..]).unwrap(), token);

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["metadata"], "0x69706673");
    }
}
