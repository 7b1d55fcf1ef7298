//! Golden wire-format tests.
//!
//! Each case in `fixtures/substrate/identifiers.json` pairs a JSON value with
//! the exact bytes the Bholdus runtime emits for it. Both directions are
//! checked: the bytes decode to the value, and the value encodes to the bytes.

use bholdus_primitives::{
    parity_scale_codec::Encode, AssetId, CodecError, CurrencyId, DexShare, TokenSymbol,
    TradingPair, TypedCodec,
};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/substrate");
    p.push(name);
    p
}

fn load_cases() -> Vec<serde_json::Value> {
    let json =
        std::fs::read_to_string(fixture_path("identifiers.json")).expect("fixture not found");
    serde_json::from_str(&json).expect("fixture is not valid JSON")
}

fn check_case<T>(case: &serde_json::Value)
where
    T: TypedCodec + DeserializeOwned + PartialEq + Debug,
{
    let name = case["name"].as_str().unwrap();
    let expected: T = serde_json::from_value(case["value"].clone())
        .unwrap_or_else(|e| panic!("{name}: bad fixture value: {e}"));
    let encoded = case["encoded"].as_str().unwrap();

    let decoded = T::decode_hex(encoded).unwrap_or_else(|e| panic!("{name}: decode failed: {e}"));
    assert_eq!(decoded, expected, "{name}: decoded value mismatch");
    assert_eq!(expected.encode_hex(), encoded, "{name}: encoding mismatch");
    assert_eq!(
        expected.size_hint(),
        expected.encode().len(),
        "{name}: size_hint mismatch"
    );
}

// ─── Fixture-driven cases ─────────────────────────────────────────────────────

#[test]
fn identifiers_golden() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in &cases {
        match case["type"].as_str().unwrap() {
            "CurrencyId" => check_case::<CurrencyId>(case),
            "DexShare" => check_case::<DexShare>(case),
            "TokenSymbol" => check_case::<TokenSymbol>(case),
            "TradingPair" => check_case::<TradingPair>(case),
            "AssetId" => check_case::<AssetId>(case),
            other => panic!("unknown fixture type {other}"),
        }
    }
}

#[test]
fn every_union_variant_is_covered() {
    let cases = load_cases();
    let decoded: Vec<CurrencyId> = cases
        .iter()
        .filter(|c| c["type"] == "CurrencyId")
        .map(|c| CurrencyId::decode_hex(c["encoded"].as_str().unwrap()).unwrap())
        .collect();

    assert!(decoded.contains(&CurrencyId::native()));
    assert!(decoded.iter().any(|c| matches!(c, CurrencyId::Token(TokenSymbol::Token(_)))));
    assert!(decoded.iter().any(|c| c.is_dex_share()));
}

// ─── Malformed input ──────────────────────────────────────────────────────────

#[test]
fn rejects_every_unknown_currency_tag() {
    for tag in 2u8..=255 {
        let bytes = [tag, 0x00, 0x00];
        let mut input: &[u8] = &bytes;
        match CurrencyId::decode_from(&mut input) {
            Err(CodecError::UnknownDiscriminant { ty, byte }) => {
                assert_eq!(ty, "CurrencyId");
                assert_eq!(byte, tag);
            }
            other => panic!("tag {tag:#04x}: expected UnknownDiscriminant, got {other:?}"),
        }
        assert_eq!(input.len(), 2, "tag {tag:#04x} consumed more than one byte");
    }
}

#[test]
fn rejects_every_unknown_token_symbol_tag() {
    for tag in 2u8..=255 {
        let err = TokenSymbol::decode_bytes(&[tag]).unwrap_err();
        assert!(err.is_unknown_discriminant());
    }
}

#[test]
fn dex_share_tag_alone_is_truncated() {
    let err = CurrencyId::decode_hex("0x01").unwrap_err();
    assert!(err.is_truncated(), "got {err:?}");
}

#[test]
fn every_prefix_of_a_valid_encoding_is_truncated() {
    let full = CurrencyId::dex_share(TokenSymbol::token(1), TokenSymbol::token(2)).encode();
    for len in 0..full.len() {
        let err = CurrencyId::decode_bytes(&full[..len]).unwrap_err();
        assert!(err.is_truncated(), "prefix of {len} bytes: {err:?}");
    }
}

#[test]
fn write_to_reports_write_failure() {
    struct ClosedSink;
    impl std::io::Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = CurrencyId::native().write_to(&mut ClosedSink).unwrap_err();
    assert!(matches!(err, CodecError::WriteFailure { ty: "CurrencyId", .. }));

    let mut buf = Vec::new();
    CurrencyId::token(7).write_to(&mut buf).unwrap();
    assert_eq!(buf, CurrencyId::token(7).encode());
}
