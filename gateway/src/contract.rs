//! Gateway contract entry points.
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_extract_fee, execute_lock, execute_pause, execute_set_fee_collector,
    execute_set_proxy, execute_transfer_ownership, execute_unpause,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_fee_collector, query_is_owner, query_is_paused, query_proxy,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, FEE_COLLECTOR, LOCK_PROXY, OWNER, PAUSED};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let fee_collector = deps.api.addr_validate(&msg.fee_collector)?;
    OWNER.save(deps.storage, &owner)?;
    FEE_COLLECTOR.save(deps.storage, &fee_collector)?;

    if let Some(proxy) = msg.lock_proxy.as_deref() {
        let proxy = deps.api.addr_validate(proxy)?;
        LOCK_PROXY.save(deps.storage, &proxy)?;
    }

    let paused = msg.paused.unwrap_or(false);
    PAUSED.save(deps.storage, &paused)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("fee_collector", fee_collector)
        .add_attribute("paused", paused.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::SetFeeCollector { address } => execute_set_fee_collector(deps, info, address),
        ExecuteMsg::SetProxy { address } => execute_set_proxy(deps, info, address),
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::ExtractFee { asset } => execute_extract_fee(deps, env, info, asset),
        ExecuteMsg::Lock {
            from_asset,
            from_address,
            to_chain_id,
            to_address,
            amount,
            fee,
            request_id,
        } => execute_lock(
            deps,
            env,
            info,
            from_asset,
            from_address,
            to_chain_id,
            to_address,
            amount,
            fee,
            request_id,
        ),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsOwner { address } => to_json_binary(&query_is_owner(deps, address)?),
        QueryMsg::FeeCollector {} => to_json_binary(&query_fee_collector(deps)?),
        QueryMsg::Proxy {} => to_json_binary(&query_proxy(deps)?),
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
