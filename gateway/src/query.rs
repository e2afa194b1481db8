//! Query handlers for the gateway contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    ConfigResponse, FeeCollectorResponse, IsOwnerResponse, IsPausedResponse, ProxyResponse,
};
use crate::state::{FEE_COLLECTOR, LOCK_PROXY, OWNER, PAUSED};

/// Query the full gateway configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        owner: OWNER.load(deps.storage)?,
        fee_collector: FEE_COLLECTOR.load(deps.storage)?,
        lock_proxy: LOCK_PROXY.may_load(deps.storage)?,
        paused: PAUSED.load(deps.storage)?,
    })
}

/// Whether `address` is the current owner. Queries carry no caller
/// identity, so the caller asks about an explicit address (its own).
pub fn query_is_owner(deps: Deps, address: String) -> StdResult<IsOwnerResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let owner = OWNER.load(deps.storage)?;
    Ok(IsOwnerResponse {
        is_owner: addr == owner,
    })
}

/// Query the current fee collector.
pub fn query_fee_collector(deps: Deps) -> StdResult<FeeCollectorResponse> {
    Ok(FeeCollectorResponse {
        fee_collector: FEE_COLLECTOR.load(deps.storage)?,
    })
}

/// Query the configured lock proxy, if any.
pub fn query_proxy(deps: Deps) -> StdResult<ProxyResponse> {
    Ok(ProxyResponse {
        lock_proxy: LOCK_PROXY.may_load(deps.storage)?,
    })
}

/// Query the pause state.
pub fn query_is_paused(deps: Deps) -> StdResult<IsPausedResponse> {
    Ok(IsPausedResponse {
        paused: PAUSED.load(deps.storage)?,
    })
}
