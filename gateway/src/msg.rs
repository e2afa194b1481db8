//! Message types for the gateway contract.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Sole principal authorized to reconfigure the gateway
    pub owner: String,
    /// Recipient of swept fees
    pub fee_collector: String,
    /// Downstream lock-proxy contract; `Lock` fails until one is set
    pub lock_proxy: Option<String>,
    /// Initial pause state; defaults to unpaused
    pub paused: Option<bool>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Replace the gateway owner. The new owner is not validated beyond
    /// address format; the current owner is trusted not to hand the
    /// gateway to an unreachable address.
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },

    /// Set the fee collector address
    ///
    /// Authorization: Owner only
    SetFeeCollector { address: String },

    /// Set the downstream lock-proxy contract
    ///
    /// Authorization: Owner only
    SetProxy { address: String },

    /// Disable `Lock`; administrative operations remain available
    ///
    /// Authorization: Owner only
    Pause {},

    /// Re-enable `Lock`
    ///
    /// Authorization: Owner only
    Unpause {},

    /// Sweep the gateway's entire balance of `asset` to the fee collector.
    /// There is no accrued-fee counter: whatever the gateway holds of the
    /// asset is drained, incidental holdings included.
    ///
    /// Authorization: Fee collector only
    ExtractFee { asset: AssetInfo },

    /// Collect `fee` units of `from_asset` from `from_address` into the
    /// gateway and forward a lock of the remaining `amount - fee` to the
    /// configured lock proxy.
    ///
    /// For a native `from_asset` the fee must be attached as funds; for a
    /// CW20 asset the gateway pulls it via `TransferFrom` under a prior
    /// allowance.
    ///
    /// Authorization: anyone, but the caller must be `from_address`
    Lock {
        from_asset: AssetInfo,
        from_address: String,
        to_chain_id: u64,
        /// Recipient on the destination chain, in that chain's encoding
        to_address: Binary,
        amount: Uint128,
        fee: Uint128,
        /// Caller-chosen identifier echoed in the lock event for off-chain
        /// indexing
        request_id: u64,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the full gateway configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Whether `address` is the current owner
    #[returns(IsOwnerResponse)]
    IsOwner { address: String },

    /// Returns the current fee collector
    #[returns(FeeCollectorResponse)]
    FeeCollector {},

    /// Returns the configured lock proxy, if any
    #[returns(ProxyResponse)]
    Proxy {},

    /// Whether `Lock` is currently disabled
    #[returns(IsPausedResponse)]
    IsPaused {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub fee_collector: Addr,
    pub lock_proxy: Option<Addr>,
    pub paused: bool,
}

#[cw_serde]
pub struct IsOwnerResponse {
    pub is_owner: bool,
}

#[cw_serde]
pub struct FeeCollectorResponse {
    pub fee_collector: Addr,
}

#[cw_serde]
pub struct ProxyResponse {
    pub lock_proxy: Option<Addr>,
}

#[cw_serde]
pub struct IsPausedResponse {
    pub paused: bool,
}
