//! Event record payloads.
//!
//! Each struct is the argument list of one runtime event, in declaration
//! order, SCALE-encoded back to back. Phase and topics are carried by the
//! enclosing [`EventEntry`](crate::aggregate::EventEntry), not by the record.

use bholdus_primitives::codec::hex_vec;
use bholdus_primitives::{
    AccountId32, Amount, AssetId, Balance, CurrencyId, DispatchResult, RegistryId, ResourceId,
    TokenId, TradingPair, H256,
};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

// ─── Erc721 ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct Erc721Minted {
    pub owner: AccountId32,
    pub token_id: TokenId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct Erc721Transferred {
    pub from: AccountId32,
    pub to: AccountId32,
    pub token_id: TokenId,
}

/// Same 32-byte `TokenId` as the mint and transfer events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct Erc721Burned {
    pub token_id: TokenId,
}

// ─── Example / Nfts / Fees ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRemark {
    pub hash: H256,
}

/// An NFT is ready to be deposited to another chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct NftsDepositAsset {
    pub asset: H256,
}

/// The bridge fee for `key` changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct FeesFeeChanged {
    pub key: H256,
    pub new_price: Balance,
}

// ─── MultiAccount ─────────────────────────────────────────────────────────────

/// Block height and extrinsic index identifying a multisig operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub struct TimePoint {
    pub height: u32,
    pub index: u32,
}

/// `who` created the multi account `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct MultiAccountNewMultiAccount {
    pub who: AccountId32,
    pub id: AccountId32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct MultiAccountMultiAccountUpdated {
    pub who: AccountId32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct MultiAccountMultiAccountRemoved {
    pub who: AccountId32,
}

/// `who` started a multisig operation on the multi account `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct MultiAccountNewMultisig {
    pub who: AccountId32,
    pub id: AccountId32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct MultiAccountMultisigApproval {
    pub who: AccountId32,
    pub time_point: TimePoint,
    pub id: AccountId32,
}

/// `who` supplied the final approval and the call ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct MultiAccountMultisigExecuted {
    pub who: AccountId32,
    pub time_point: TimePoint,
    pub id: AccountId32,
    pub result: DispatchResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct MultiAccountMultisigCancelled {
    pub who: AccountId32,
    pub time_point: TimePoint,
    pub id: AccountId32,
}

// ─── TreasuryReward / RadClaims ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryRewardTreasuryMinting {
    pub who: AccountId32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct RadClaimsClaimed {
    pub who: AccountId32,
    pub value: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct RadClaimsRootHashStored {
    pub root_hash: H256,
}

// ─── Nft / Registry ───────────────────────────────────────────────────────────

/// Ownership of `asset_id` moved to `who`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct NftTransferred {
    pub registry_id: RegistryId,
    pub asset_id: AssetId,
    pub who: AccountId32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct RegistryMint {
    pub registry_id: RegistryId,
    pub token_id: TokenId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct RegistryRegistryCreated {
    pub registry_id: RegistryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct RegistryRegistryTmp {
    pub hash: H256,
}

// ─── ElectionProviderMultiPhase / Staking ─────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct ElectionSignedPhaseStarted {
    pub round: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct ElectionUnsignedPhaseStarted {
    pub round: u32,
}

/// `compute` is the SCALE-encoded `ElectionCompute`, absent when the election failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct ElectionElectionFinalized {
    pub compute: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct StakingStakingElection;

// ─── Tokens ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensIdentitySet {
    pub asset_id: CurrencyId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensCreated {
    pub asset_id: CurrencyId,
    pub creator: AccountId32,
    pub owner: AccountId32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensIssued {
    pub asset_id: CurrencyId,
    pub owner: AccountId32,
    pub balance: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensTransferred {
    pub asset_id: CurrencyId,
    pub from: AccountId32,
    pub to: AccountId32,
    pub balance: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensBurned {
    pub asset_id: CurrencyId,
    pub owner: AccountId32,
    pub balance: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensFrozen {
    pub asset_id: CurrencyId,
    pub who: AccountId32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensThawed {
    pub asset_id: CurrencyId,
    pub who: AccountId32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensEndowed {
    pub asset_id: CurrencyId,
    pub who: AccountId32,
    pub amount: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensAssetFrozen {
    pub asset_id: CurrencyId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensAssetThawed {
    pub asset_id: CurrencyId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensAssetVerified {
    pub asset_id: CurrencyId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensDestroyed {
    pub asset_id: CurrencyId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensForceCreated {
    pub asset_id: CurrencyId,
    pub owner: AccountId32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensMetadataSet {
    pub asset_id: CurrencyId,
    #[serde(with = "hex_vec")]
    pub name: Vec<u8>,
    #[serde(with = "hex_vec")]
    pub symbol: Vec<u8>,
    pub decimals: u8,
    pub is_frozen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensMetadataCleared {
    pub asset_id: CurrencyId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct TokensProfileSet {
    pub asset_id: CurrencyId,
    #[serde(with = "hex_vec")]
    pub name: Vec<u8>,
    pub is_verified: bool,
}

// ─── Currencies ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct CurrenciesTransferred {
    pub currency_id: CurrencyId,
    pub from: AccountId32,
    pub to: AccountId32,
    pub amount: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct CurrenciesBalanceUpdated {
    pub currency_id: CurrencyId,
    pub who: AccountId32,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct CurrenciesDeposited {
    pub currency_id: CurrencyId,
    pub who: AccountId32,
    pub amount: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct CurrenciesWithdrawn {
    pub currency_id: CurrencyId,
    pub who: AccountId32,
    pub amount: Balance,
}

// ─── Dex ──────────────────────────────────────────────────────────────────────

/// A swap along `trading_path`, first element supplied, last element received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct DexSwap {
    pub who: AccountId32,
    pub trading_path: Vec<CurrencyId>,
    pub supply_amount: Balance,
    pub target_amount: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct DexTradingPairEnabledFromProvisioning {
    pub currency_id_0: CurrencyId,
    pub pool_0: Balance,
    pub currency_id_1: CurrencyId,
    pub pool_1: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct DexTradingPairDisabled {
    pub trading_pair: TradingPair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct DexTradingPairEnabled {
    pub trading_pair: TradingPair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct DexTradingPairProvisioning {
    pub trading_pair: TradingPair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct DexAddProvision {
    pub who: AccountId32,
    pub currency_0: CurrencyId,
    pub contribution_0: Balance,
    pub currency_1: CurrencyId,
    pub contribution_1: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct DexAddLiquidity {
    pub who: AccountId32,
    pub currency_id_0: CurrencyId,
    pub pool_increment_0: Balance,
    pub currency_id_1: CurrencyId,
    pub pool_increment_1: Balance,
    pub share_increment: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct DexRemoveLiquidity {
    pub who: AccountId32,
    pub currency_id_0: CurrencyId,
    pub pool_decrement_0: Balance,
    pub currency_id_1: CurrencyId,
    pub pool_decrement_1: Balance,
    pub share_decrement: Balance,
}

// ─── ChainBridgeTransfer ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct ChainBridgeTransferResourceIdRegistered {
    pub resource_id: ResourceId,
    pub currency_id: CurrencyId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "camelCase")]
pub struct ChainBridgeTransferResourceIdUnregistered {
    pub resource_id: ResourceId,
    pub currency_id: CurrencyId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bholdus_primitives::{DispatchError, TokenSymbol};

    #[test]
    fn currency_field_is_inline() {
        let record = CurrenciesDeposited {
            currency_id: CurrencyId::token(7),
            who: AccountId32::from([0x01; 32]),
            amount: 1_000,
        };
        let bytes = record.encode();
        // 6 (currency) + 32 (account) + 16 (u128)
        assert_eq!(bytes.len(), 54);
        assert_eq!(&bytes[..6], &[0x00, 0x01, 0x07, 0x00, 0x00, 0x00]);
        assert_eq!(CurrenciesDeposited::decode(&mut &bytes[..]).unwrap(), record);
    }

    #[test]
    fn swap_path_is_compact_prefixed() {
        let record = DexSwap {
            who: AccountId32::from([0x02; 32]),
            trading_path: vec![
                CurrencyId::native(),
                CurrencyId::dex_share(TokenSymbol::Native, TokenSymbol::token(1)),
                CurrencyId::token(1),
            ],
            supply_amount: 10,
            target_amount: 9,
        };
        let bytes = record.encode();
        // compact(3) = 0x0c
        assert_eq!(bytes[32], 0x0c);
        assert_eq!(DexSwap::decode(&mut &bytes[..]).unwrap(), record);
    }

    #[test]
    fn multisig_executed_carries_dispatch_result() {
        let record = MultiAccountMultisigExecuted {
            who: AccountId32::from([0x03; 32]),
            time_point: TimePoint { height: 12, index: 1 },
            id: AccountId32::from([0x04; 32]),
            result: Err(DispatchError::BadOrigin),
        };
        let bytes = record.encode();
        // 32 + 8 (time point) + 32, then result tag and error tag
        assert_eq!(bytes.len(), 74);
        assert_eq!(&bytes[72..], &[0x01, 0x02]);
        assert_eq!(MultiAccountMultisigExecuted::decode(&mut &bytes[..]).unwrap(), record);

        let mut ok = bytes[..72].to_vec();
        ok.push(0x00);
        let decoded = MultiAccountMultisigExecuted::decode(&mut &ok[..]).unwrap();
        assert_eq!(decoded.result, Ok(()));
    }

    #[test]
    fn bad_currency_discriminant_fails_record() {
        let mut bytes = TokensAssetFrozen {
            asset_id: CurrencyId::native(),
        }
        .encode();
        bytes[0] = 0x04;
        assert!(TokensAssetFrozen::decode(&mut &bytes[..]).is_err());
    }

    #[test]
    fn unit_record_is_empty() {
        assert!(StakingStakingElection.encode().is_empty());
    }
}
