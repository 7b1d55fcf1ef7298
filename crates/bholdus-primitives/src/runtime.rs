//! Runtime primitives that event records are built from.

use crate::codec::fixed_bytes_codec;
use alloy_primitives::B256;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free balance as stored by the `Tokens` / `Currencies` pallets.
pub type Balance = u128;

/// Signed balance delta (`Currencies::BalanceUpdated`).
pub type Amount = i128;

/// 32-byte account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId32(pub B256);

/// 32-byte hash (block hash, remark hash, topic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct H256(pub B256);

/// ChainBridge resource identifier (`[u8; 32]` on the runtime side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub B256);

fixed_bytes_codec!(AccountId32, B256, 32);
fixed_bytes_codec!(H256, B256, 32);
fixed_bytes_codec!(ResourceId, B256, 32);

macro_rules! bytes32_conversions {
    ($($name:ident),+) => {
        $(
            impl From<[u8; 32]> for $name {
                fn from(raw: [u8; 32]) -> Self {
                    Self(B256::from(raw))
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "0x{}", hex::encode(self.0.as_slice()))
                }
            }
        )+
    };
}

bytes32_conversions!(AccountId32, H256, ResourceId);

/// Where in the block an event was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// During the extrinsic at this index.
    ApplyExtrinsic(u32),
    Finalization,
    #[default]
    Initialization,
}

/// Failure reason of a dispatched call, as the runtime encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub enum DispatchError {
    /// Free-form error; the message is not part of the encoding.
    Other,
    CannotLookup,
    BadOrigin,
    /// Error raised by pallet `index`.
    Module { index: u8, error: u8 },
    ConsumerRemaining,
    NoProviders,
    Token(TokenError),
    Arithmetic(ArithmeticError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub enum TokenError {
    NoFunds,
    WouldDie,
    BelowMinimum,
    CannotCreate,
    UnknownAsset,
    Frozen,
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub enum ArithmeticError {
    Underflow,
    Overflow,
    DivisionByZero,
}

/// Outcome of a dispatched call: `0x00` ok, `0x01` followed by the error.
pub type DispatchResult = Result<(), DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TypedCodec;

    #[test]
    fn phase_wire_format() {
        assert_eq!(Phase::ApplyExtrinsic(3).encode(), vec![0x00, 0x03, 0, 0, 0]);
        assert_eq!(Phase::Finalization.encode(), vec![0x01]);
        assert_eq!(Phase::Initialization.encode(), vec![0x02]);
        assert_eq!(
            Phase::decode(&mut &[0x00, 0x03, 0, 0, 0][..]).unwrap(),
            Phase::ApplyExtrinsic(3)
        );
    }

    #[test]
    fn dispatch_result_wire_format() {
        let ok: DispatchResult = Ok(());
        assert_eq!(ok.encode(), vec![0x00]);

        let failed: DispatchResult = Err(DispatchError::Module { index: 9, error: 2 });
        assert_eq!(failed.encode(), vec![0x01, 0x03, 0x09, 0x02]);
        assert_eq!(DispatchResult::decode(&mut &[0x01, 0x03, 0x09, 0x02][..]).unwrap(), failed);

        let arith: DispatchResult = Err(DispatchError::Arithmetic(ArithmeticError::Overflow));
        assert_eq!(arith.encode(), vec![0x01, 0x07, 0x01]);
        assert!(DispatchResult::decode(&mut &[0x01, 0x08][..]).is_err());
    }

    #[test]
    fn account_id_is_raw_bytes() {
        let who = AccountId32::from([0x11; 32]);
        assert_eq!(who.encode(), vec![0x11; 32]);
        assert_eq!(AccountId32::decode_bytes(&[0x11; 32]).unwrap(), who);
    }

    #[test]
    fn short_hash_is_truncated() {
        let err = H256::decode_bytes(&[0u8; 31]).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn display_is_hex() {
        let id = ResourceId::from([0u8; 32]);
        assert_eq!(id.to_string(), format!("0x{}", "00".repeat(32)));
    }
}
