//! Per-kind event aggregate.
//!
//! [`Events`] holds one ordered list per [`EventKind`]. Pushing a
//! [`RawEvent`] resolves its kind from the pallet/event names, decodes the
//! argument bytes into the matching record, and appends it together with the
//! event's phase and topics.

use crate::error::EventError;
use crate::kind::{for_each_event_kind, EventKind};
use crate::raw::RawEvent;
use crate::records::*;
use bholdus_primitives::{Phase, H256};
use indexmap::IndexMap;
use parity_scale_codec::{Decode, DecodeAll};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A decoded record with the block context it was emitted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry<T> {
    pub phase: Phase,
    pub event: T,
    pub topics: Vec<H256>,
}

impl<T: Decode> EventEntry<T> {
    /// Decode `raw.data` as `T`. Every byte must be consumed.
    fn decode_raw(kind: EventKind, raw: &RawEvent) -> Result<Self, EventError> {
        let event = T::decode_all(&mut raw.data.as_slice()).map_err(|e| {
            EventError::RecordDecodeFailed {
                kind,
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            phase: raw.phase,
            event,
            topics: raw.topics.clone(),
        })
    }
}

macro_rules! define_events {
    ($($kind:ident: $pallet:literal / $event:literal => $field:ident),+ $(,)?) => {
        /// Decoded events grouped by kind, each list in emission order.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Events {
            $(
                #[serde(default, skip_serializing_if = "Vec::is_empty")]
                pub $field: Vec<EventEntry<$kind>>,
            )+
        }

        impl Events {
            fn append(&mut self, kind: EventKind, raw: &RawEvent) -> Result<(), EventError> {
                match kind {
                    $(EventKind::$kind => self.$field.push(EventEntry::decode_raw(kind, raw)?),)+
                }
                Ok(())
            }

            /// Number of stored events of `kind`.
            pub fn count(&self, kind: EventKind) -> usize {
                match kind {
                    $(EventKind::$kind => self.$field.len(),)+
                }
            }

            /// Append every list of `other` after the matching list of `self`.
            pub fn merge(&mut self, other: Events) {
                $(self.$field.extend(other.$field);)+
            }
        }
    };
}

for_each_event_kind!(define_events);

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `raw` and append it to the list for its kind.
    ///
    /// On error nothing is appended.
    pub fn push(&mut self, raw: &RawEvent) -> Result<EventKind, EventError> {
        let kind = EventKind::from_names(&raw.pallet, &raw.event).ok_or_else(|| {
            EventError::UnknownEvent {
                pallet: raw.pallet.clone(),
                event: raw.event.clone(),
            }
        })?;
        self.append(kind, raw)?;
        debug!(kind = %kind, phase = ?raw.phase, "appended event record");
        Ok(kind)
    }

    /// Total number of stored events across all kinds.
    pub fn len(&self) -> usize {
        EventKind::ALL.iter().map(|k| self.count(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-zero counts, in catalogue order.
    pub fn summary(&self) -> IndexMap<EventKind, usize> {
        EventKind::ALL
            .iter()
            .map(|k| (*k, self.count(*k)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bholdus_primitives::{AccountId32, CurrencyId, TokenSymbol, TradingPair};
    use parity_scale_codec::Encode;

    fn alice() -> AccountId32 {
        AccountId32::from([0xaa; 32])
    }

    #[test]
    fn push_routes_by_pallet_and_event() {
        let mut events = Events::new();
        let deposited = CurrenciesDeposited {
            currency_id: CurrencyId::token(7),
            who: alice(),
            amount: 500,
        };
        let raw = RawEvent::new("Currencies", "Deposited", deposited.encode())
            .with_phase(Phase::ApplyExtrinsic(2));

        assert_eq!(events.push(&raw).unwrap(), EventKind::CurrenciesDeposited);
        assert_eq!(events.currencies_deposited.len(), 1);
        assert_eq!(events.currencies_deposited[0].event, deposited);
        assert_eq!(events.currencies_deposited[0].phase, Phase::ApplyExtrinsic(2));
        assert_eq!(events.count(EventKind::CurrenciesDeposited), 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn unknown_event_is_rejected() {
        let mut events = Events::new();
        let err = events
            .push(&RawEvent::new("System", "ExtrinsicSuccess", vec![]))
            .unwrap_err();
        assert!(matches!(err, EventError::UnknownEvent { .. }));
        assert!(events.is_empty());
    }

    #[test]
    fn trailing_bytes_fail_the_record() {
        let mut bytes = TokensAssetFrozen {
            asset_id: CurrencyId::native(),
        }
        .encode();
        bytes.push(0xff);
        let mut events = Events::new();
        let err = events
            .push(&RawEvent::new("Tokens", "AssetFrozen", bytes))
            .unwrap_err();
        assert!(matches!(
            err,
            EventError::RecordDecodeFailed {
                kind: EventKind::TokensAssetFrozen,
                ..
            }
        ));
        assert!(events.is_empty());
    }

    #[test]
    fn summary_is_in_catalogue_order() {
        let pair = TradingPair::new(
            CurrencyId::native(),
            CurrencyId::dex_share(TokenSymbol::Native, TokenSymbol::token(3)),
        );
        let mut events = Events::new();
        let enabled = DexTradingPairEnabled { trading_pair: pair }.encode();
        events.push(&RawEvent::new("Dex", "TradingPairEnabled", enabled.clone())).unwrap();
        events.push(&RawEvent::new("Dex", "TradingPairEnabled", enabled)).unwrap();
        events
            .push(&RawEvent::new("Staking", "StakingElection", vec![]))
            .unwrap();

        let summary: Vec<_> = events.summary().into_iter().collect();
        assert_eq!(
            summary,
            vec![
                (EventKind::StakingStakingElection, 1),
                (EventKind::DexTradingPairEnabled, 2),
            ]
        );
    }

    #[test]
    fn merge_appends_in_order() {
        let mut a = Events::new();
        let mut b = Events::new();
        let first = RadClaimsClaimed { who: alice(), value: 1 };
        let second = RadClaimsClaimed { who: alice(), value: 2 };
        a.push(&RawEvent::new("RadClaims", "Claimed", first.encode())).unwrap();
        b.push(&RawEvent::new("RadClaims", "Claimed", second.encode())).unwrap();
        a.merge(b);
        let values: Vec<_> = a.rad_claims_claimed.iter().map(|e| e.event.value).collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn empty_lists_are_omitted_from_json() {
        let mut events = Events::new();
        events
            .push(&RawEvent::new(
                "ElectionProviderMultiPhase",
                "SignedPhaseStarted",
                ElectionSignedPhaseStarted { round: 4 }.encode(),
            ))
            .unwrap();
        let json = serde_json::to_value(&events).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["electionSignedPhaseStarted"][0]["event"]["round"], 4);
    }
}
