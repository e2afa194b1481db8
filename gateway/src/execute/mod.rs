//! Execute handlers for the gateway contract.
//!
//! - `admin` - ownership transfer, collector/proxy setters, pause/unpause
//! - `fees` - fee extraction (full-balance sweep)
//! - `lock` - the lock orchestrator

mod admin;
mod fees;
mod lock;

pub use admin::*;
pub use fees::*;
pub use lock::*;

use cosmwasm_std::{ensure, Addr, Storage};

use crate::error::ContractError;
use crate::state::{FEE_COLLECTOR, OWNER};

/// Gate for owner-only operations. Returns the current owner so callers
/// that need it (ownership transfer) avoid a second load.
pub(crate) fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<Addr, ContractError> {
    let owner = OWNER.load(storage)?;
    ensure!(*sender == owner, ContractError::Unauthorized);
    Ok(owner)
}

/// Gate for the fee-collector-only sweep. A distinct identity check from
/// ownership: the owner cannot extract fees unless it is also the collector.
pub(crate) fn assert_collector(
    storage: &dyn Storage,
    sender: &Addr,
) -> Result<Addr, ContractError> {
    let collector = FEE_COLLECTOR.load(storage)?;
    ensure!(*sender == collector, ContractError::UnauthorizedCollector);
    Ok(collector)
}
