//! The closed catalogue of runtime events this crate decodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Invoke `$callback!` with the full event catalogue:
/// `RecordType: "Pallet" / "Event" => aggregate_field`.
///
/// The record type name doubles as the [`EventKind`] variant name.
macro_rules! for_each_event_kind {
    ($callback:ident) => {
        $callback! {
            Erc721Minted: "Erc721" / "Minted" => erc721_minted,
            Erc721Transferred: "Erc721" / "Transferred" => erc721_transferred,
            Erc721Burned: "Erc721" / "Burned" => erc721_burned,
            ExampleRemark: "Example" / "Remark" => example_remark,
            NftsDepositAsset: "Nfts" / "DepositAsset" => nfts_deposit_asset,
            FeesFeeChanged: "Fees" / "FeeChanged" => fees_fee_changed,
            MultiAccountNewMultiAccount: "MultiAccount" / "NewMultiAccount" => multi_account_new_multi_account,
            MultiAccountMultiAccountUpdated: "MultiAccount" / "MultiAccountUpdated" => multi_account_multi_account_updated,
            MultiAccountMultiAccountRemoved: "MultiAccount" / "MultiAccountRemoved" => multi_account_multi_account_removed,
            MultiAccountNewMultisig: "MultiAccount" / "NewMultisig" => multi_account_new_multisig,
            MultiAccountMultisigApproval: "MultiAccount" / "MultisigApproval" => multi_account_multisig_approval,
            MultiAccountMultisigExecuted: "MultiAccount" / "MultisigExecuted" => multi_account_multisig_executed,
            MultiAccountMultisigCancelled: "MultiAccount" / "MultisigCancelled" => multi_account_multisig_cancelled,
            TreasuryRewardTreasuryMinting: "TreasuryReward" / "TreasuryMinting" => treasury_reward_treasury_minting,
            NftTransferred: "Nft" / "Transferred" => nft_transferred,
            RadClaimsClaimed: "RadClaims" / "Claimed" => rad_claims_claimed,
            RadClaimsRootHashStored: "RadClaims" / "RootHashStored" => rad_claims_root_hash_stored,
            RegistryMint: "Registry" / "Mint" => registry_mint,
            RegistryRegistryCreated: "Registry" / "RegistryCreated" => registry_registry_created,
            RegistryRegistryTmp: "Registry" / "RegistryTmp" => registry_registry_tmp,
            ElectionSignedPhaseStarted: "ElectionProviderMultiPhase" / "SignedPhaseStarted" => election_signed_phase_started,
            ElectionUnsignedPhaseStarted: "ElectionProviderMultiPhase" / "UnsignedPhaseStarted" => election_unsigned_phase_started,
            ElectionElectionFinalized: "ElectionProviderMultiPhase" / "ElectionFinalized" => election_election_finalized,
            StakingStakingElection: "Staking" / "StakingElection" => staking_staking_election,
            TokensIdentitySet: "Tokens" / "IdentitySet" => tokens_identity_set,
            TokensCreated: "Tokens" / "Created" => tokens_created,
            TokensIssued: "Tokens" / "Issued" => tokens_issued,
            TokensTransferred: "Tokens" / "Transferred" => tokens_transferred,
            TokensBurned: "Tokens" / "Burned" => tokens_burned,
            TokensFrozen: "Tokens" / "Frozen" => tokens_frozen,
            TokensThawed: "Tokens" / "Thawed" => tokens_thawed,
            TokensEndowed: "Tokens" / "Endowed" => tokens_endowed,
            TokensAssetFrozen: "Tokens" / "AssetFrozen" => tokens_asset_frozen,
            TokensAssetThawed: "Tokens" / "AssetThawed" => tokens_asset_thawed,
            TokensAssetVerified: "Tokens" / "AssetVerified" => tokens_asset_verified,
            TokensDestroyed: "Tokens" / "Destroyed" => tokens_destroyed,
            TokensForceCreated: "Tokens" / "ForceCreated" => tokens_force_created,
            TokensMetadataSet: "Tokens" / "MetadataSet" => tokens_metadata_set,
            TokensMetadataCleared: "Tokens" / "MetadataCleared" => tokens_metadata_cleared,
            TokensProfileSet: "Tokens" / "ProfileSet" => tokens_profile_set,
            CurrenciesTransferred: "Currencies" / "Transferred" => currencies_transferred,
            CurrenciesBalanceUpdated: "Currencies" / "BalanceUpdated" => currencies_balance_updated,
            CurrenciesDeposited: "Currencies" / "Deposited" => currencies_deposited,
            CurrenciesWithdrawn: "Currencies" / "Withdrawn" => currencies_withdrawn,
            DexSwap: "Dex" / "Swap" => dex_swap,
            DexTradingPairEnabledFromProvisioning: "Dex" / "TradingPairEnabledFromProvisioning" => dex_trading_pair_enabled_from_provisioning,
            DexTradingPairDisabled: "Dex" / "TradingPairDisabled" => dex_trading_pair_disabled,
            DexTradingPairEnabled: "Dex" / "TradingPairEnabled" => dex_trading_pair_enabled,
            DexTradingPairProvisioning: "Dex" / "TradingPairProvisioning" => dex_trading_pair_provisioning,
            DexAddProvision: "Dex" / "AddProvision" => dex_add_provision,
            DexAddLiquidity: "Dex" / "AddLiquidity" => dex_add_liquidity,
            DexRemoveLiquidity: "Dex" / "RemoveLiquidity" => dex_remove_liquidity,
            ChainBridgeTransferResourceIdRegistered: "ChainBridgeTransfer" / "ResourceIdRegistered" => chain_bridge_transfer_resource_id_registered,
            ChainBridgeTransferResourceIdUnregistered: "ChainBridgeTransfer" / "ResourceIdUnregistered" => chain_bridge_transfer_resource_id_unregistered,
        }
    };
}
pub(crate) use for_each_event_kind;

macro_rules! define_event_kind {
    ($($kind:ident: $pallet:literal / $event:literal => $field:ident),+ $(,)?) => {
        /// Every event kind the aggregate can hold, in catalogue order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum EventKind {
            $($kind),+
        }

        impl EventKind {
            pub const ALL: &'static [EventKind] = &[$(EventKind::$kind),+];

            /// Runtime pallet name, e.g. `"Tokens"`.
            pub fn pallet(&self) -> &'static str {
                match self {
                    $(EventKind::$kind => $pallet),+
                }
            }

            /// Event name within the pallet, e.g. `"Transferred"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(EventKind::$kind => $event),+
                }
            }

            /// Resolve the names reported by the chain-event demultiplexer.
            pub fn from_names(pallet: &str, event: &str) -> Option<Self> {
                match (pallet, event) {
                    $(($pallet, $event) => Some(EventKind::$kind),)+
                    _ => None,
                }
            }
        }
    };
}

for_each_event_kind!(define_event_kind);

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.pallet(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_names(kind.pallet(), kind.name()), Some(*kind));
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<String> = EventKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names.len(), EventKind::ALL.len());
    }

    #[test]
    fn same_event_name_in_different_pallets() {
        assert_eq!(
            EventKind::from_names("Tokens", "Transferred"),
            Some(EventKind::TokensTransferred)
        );
        assert_eq!(
            EventKind::from_names("Currencies", "Transferred"),
            Some(EventKind::CurrenciesTransferred)
        );
        assert_eq!(EventKind::from_names("System", "ExtrinsicSuccess"), None);
    }

    #[test]
    fn display() {
        assert_eq!(EventKind::DexSwap.to_string(), "Dex.Swap");
    }
}
