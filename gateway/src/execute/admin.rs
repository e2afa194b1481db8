//! Administrative operations handlers.
//!
//! This module handles:
//! - Ownership transfer
//! - Fee collector and lock-proxy configuration
//! - Pause/unpause

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::assert_owner;
use crate::state::{FEE_COLLECTOR, LOCK_PROXY, OWNER, PAUSED};

// ============================================================================
// Ownership
// ============================================================================

/// Replace the owner unconditionally. Address-format validation only; the
/// current owner is trusted not to brick the gateway.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let old_owner = assert_owner(deps.storage, &info.sender)?;

    let new_owner = deps.api.addr_validate(&new_owner)?;
    OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("old_owner", old_owner)
        .add_attribute("new_owner", new_owner))
}

// ============================================================================
// Configuration
// ============================================================================

/// Set the fee collector address.
pub fn execute_set_fee_collector(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let collector = deps.api.addr_validate(&address)?;
    FEE_COLLECTOR.save(deps.storage, &collector)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_collector")
        .add_attribute("fee_collector", collector))
}

/// Set the downstream lock-proxy contract.
pub fn execute_set_proxy(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let proxy = deps.api.addr_validate(&address)?;
    LOCK_PROXY.save(deps.storage, &proxy)?;

    Ok(Response::new()
        .add_attribute("method", "set_proxy")
        .add_attribute("lock_proxy", proxy))
}

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the gateway (blocks `Lock`; administration stays available).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    PAUSED.save(deps.storage, &true)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

/// Unpause the gateway (resumes `Lock`).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    PAUSED.save(deps.storage, &false)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}
