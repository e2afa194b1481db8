//! Execute interface of the downstream lock-proxy contract.
//!
//! The gateway only needs the proxy's `Lock` entry point; the proxy's own
//! validation and the cross-chain settlement it performs are out of scope
//! here.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

use crate::asset::AssetInfo;

/// Messages the gateway sends to the configured lock proxy.
#[cw_serde]
pub enum LockProxyExecuteMsg {
    /// Initiate a cross-chain lock of `amount` units of `from_asset` on
    /// behalf of `from_address`, destined for `to_address` on `to_chain_id`.
    Lock {
        from_asset: AssetInfo,
        from_address: String,
        to_chain_id: u64,
        /// Recipient on the destination chain, in that chain's address
        /// encoding.
        to_address: Binary,
        amount: Uint128,
    },
}
