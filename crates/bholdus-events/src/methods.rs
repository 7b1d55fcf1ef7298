//! Extrinsic call names the relayer submits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const BRIDGE_PALLET_NAME: &str = "ChainBridge";
pub const BRIDGE_STORAGE_PREFIX: &str = "ChainBridge";

/// A dispatchable call, rendered as `Pallet.call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Method {
    AddRelayer,
    SetResource,
    SetThreshold,
    WhitelistChain,
    TransferToBridge,
    TransferNativeToBridge,
    RegisterResourceId,
    TransferFromBridge,
    Erc721Mint,
    Sudo,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown method: {0}")]
pub struct UnknownMethod(pub String);

impl Method {
    pub const ALL: &'static [Method] = &[
        Method::AddRelayer,
        Method::SetResource,
        Method::SetThreshold,
        Method::WhitelistChain,
        Method::TransferToBridge,
        Method::TransferNativeToBridge,
        Method::RegisterResourceId,
        Method::TransferFromBridge,
        Method::Erc721Mint,
        Method::Sudo,
    ];

    pub fn pallet(&self) -> &'static str {
        match self {
            Method::AddRelayer
            | Method::SetResource
            | Method::SetThreshold
            | Method::WhitelistChain => BRIDGE_PALLET_NAME,
            Method::TransferToBridge
            | Method::TransferNativeToBridge
            | Method::RegisterResourceId
            | Method::TransferFromBridge => "ChainBridgeTransfer",
            Method::Erc721Mint => "Erc721",
            Method::Sudo => "Sudo",
        }
    }

    pub fn call(&self) -> &'static str {
        match self {
            Method::AddRelayer => "add_relayer",
            Method::SetResource => "set_resource",
            Method::SetThreshold => "set_threshold",
            Method::WhitelistChain => "whitelist_chain",
            Method::TransferToBridge => "transfer_to_bridge",
            Method::TransferNativeToBridge => "transfer_native_to_bridge",
            Method::RegisterResourceId => "register_resource_id",
            Method::TransferFromBridge => "transfer_from_bridge",
            Method::Erc721Mint => "mint",
            Method::Sudo => "sudo",
        }
    }

    /// Full `Pallet.call` name.
    pub fn as_str(&self) -> String {
        format!("{}.{}", self.pallet(), self.call())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.pallet(), self.call())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pallet, call) = s.split_once('.').ok_or_else(|| UnknownMethod(s.to_string()))?;
        Method::ALL
            .iter()
            .copied()
            .find(|m| m.pallet() == pallet && m.call() == call)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

impl TryFrom<String> for Method {
    type Error = UnknownMethod;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Method> for String {
    fn from(m: Method) -> Self {
        m.as_str()
    }
}
