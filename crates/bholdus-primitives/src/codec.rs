//! The `TypedCodec` trait and the byte-stream helpers shared by every identifier.
//!
//! Decoding runs over any `parity_scale_codec::Input` in a single forward pass.
//! The identifiers also implement the plain SCALE `Encode`/`Decode` traits so
//! they can be embedded in `#[derive(Decode)]` records; those impls delegate
//! to `TypedCodec` and lose nothing but the error detail.

use crate::error::CodecError;
use parity_scale_codec::{Decode, Encode, Input};
use std::io::Write;

/// Typed decode/encode entry points for a runtime identifier.
pub trait TypedCodec: Encode + Sized {
    /// Name reported in errors, e.g. `"CurrencyId"`.
    const TYPE_NAME: &'static str;

    /// Decode one value from the current stream position, consuming exactly
    /// the bytes the value requires.
    fn decode_from<I: Input>(input: &mut I) -> Result<Self, CodecError>;

    /// Decode a value that must span the whole buffer.
    fn decode_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut input = bytes;
        let value = Self::decode_from(&mut input)?;
        if !input.is_empty() {
            return Err(CodecError::TrailingBytes {
                ty: Self::TYPE_NAME,
                remaining: input.len(),
            });
        }
        Ok(value)
    }

    /// Decode from a hex string, with or without `0x` prefix.
    fn decode_hex(s: &str) -> Result<Self, CodecError> {
        Self::decode_bytes(&parse_hex(s)?)
    }

    /// `0x`-prefixed hex of the SCALE encoding.
    fn encode_hex(&self) -> String {
        format!("0x{}", hex::encode(self.encode()))
    }

    /// Encode into an arbitrary writer (socket, file, ...).
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), CodecError> {
        writer
            .write_all(&self.encode())
            .map_err(|source| CodecError::WriteFailure {
                ty: Self::TYPE_NAME,
                source,
            })
    }
}

/// Parse a hex string (optional `0x` / `0X` prefix, surrounding whitespace ignored).
pub fn parse_hex(s: &str) -> Result<Vec<u8>, CodecError> {
    let s = s.trim();
    let stripped = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(stripped).map_err(|e| CodecError::InvalidHex {
        reason: e.to_string(),
    })
}

/// `#[serde(with = "hex_vec")]` for byte vectors: `0x`-prefixed hex strings.
pub mod hex_vec {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Read the single discriminant byte of a union.
pub(crate) fn read_discriminant<I: Input>(
    input: &mut I,
    ty: &'static str,
) -> Result<u8, CodecError> {
    input
        .read_byte()
        .map_err(|source| CodecError::TruncatedStream { ty, source })
}

/// Read a fixed-width SCALE primitive (integers, byte arrays).
pub(crate) fn read_primitive<T: Decode, I: Input>(
    input: &mut I,
    ty: &'static str,
) -> Result<T, CodecError> {
    T::decode(input).map_err(|source| CodecError::TruncatedStream { ty, source })
}

/// Implement `parity_scale_codec::Decode` by delegating to `TypedCodec`.
macro_rules! impl_scale_decode {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl parity_scale_codec::Decode for $ty {
                fn decode<I: parity_scale_codec::Input>(
                    input: &mut I,
                ) -> Result<Self, parity_scale_codec::Error> {
                    <$ty as $crate::codec::TypedCodec>::decode_from(input).map_err(Into::into)
                }
            }
        )+
    };
}
pub(crate) use impl_scale_decode;

/// Full SCALE support for a newtype over fixed-size bytes
/// (`alloy_primitives::Address`, `B256`). Encoded as the raw bytes, no prefix.
macro_rules! fixed_bytes_codec {
    ($name:ident, $inner:ty, $len:expr) => {
        impl $crate::codec::TypedCodec for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn decode_from<I: parity_scale_codec::Input>(
                input: &mut I,
            ) -> Result<Self, $crate::error::CodecError> {
                let raw: [u8; $len] = $crate::codec::read_primitive(input, Self::TYPE_NAME)?;
                Ok(Self(<$inner>::from(raw)))
            }
        }

        impl parity_scale_codec::Encode for $name {
            fn size_hint(&self) -> usize {
                $len
            }

            fn encode_to<O: parity_scale_codec::Output + ?Sized>(&self, dest: &mut O) {
                dest.write(self.0.as_slice());
            }
        }

        impl parity_scale_codec::EncodeLike for $name {}

        impl parity_scale_codec::MaxEncodedLen for $name {
            fn max_encoded_len() -> usize {
                $len
            }
        }

        $crate::codec::impl_scale_decode!($name);
    };
}
pub(crate) use fixed_bytes_codec;
