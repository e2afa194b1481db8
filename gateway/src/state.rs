//! State definitions for the gateway contract.
//!
//! Each configuration key is its own `Item`, matching the gateway's storage
//! layout of independent name-to-value entries. `LOCK_PROXY` may be absent
//! until the owner configures one; everything else is written at
//! instantiation and never removed.

use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:lock-gateway";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sole principal authorized to reconfigure the gateway
pub const OWNER: Item<Addr> = Item::new("owner");

/// Recipient of swept fees; may equal the owner
pub const FEE_COLLECTOR: Item<Addr> = Item::new("fee_collector");

/// Downstream lock-proxy contract; `Lock` fails until one is set
pub const LOCK_PROXY: Item<Addr> = Item::new("lock_proxy");

/// Whether `Lock` is currently disabled
pub const PAUSED: Item<bool> = Item::new("paused");
