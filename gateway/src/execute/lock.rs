//! Lock orchestrator.
//!
//! Validates a lock request, collects the fee into the gateway's own
//! account, and forwards the net amount to the configured lock proxy. The
//! proxy performs all further validation of the destination parameters;
//! the gateway only enforces what it needs for its own accounting.

use common::{AssetInfo, LockProxyExecuteMsg};
use cosmwasm_std::{
    ensure, to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{LOCK_PROXY, PAUSED};

/// Execute handler for lock requests.
#[allow(clippy::too_many_arguments)]
pub fn execute_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from_asset: AssetInfo,
    from_address: String,
    to_chain_id: u64,
    to_address: Binary,
    amount: Uint128,
    fee: Uint128,
    request_id: u64,
) -> Result<Response, ContractError> {
    ensure!(!PAUSED.load(deps.storage)?, ContractError::Paused);

    // Witness check: the host has verified the signature for info.sender,
    // so equality with from_address is proof of authority over it.
    let from = deps.api.addr_validate(&from_address)?;
    ensure!(
        info.sender == from,
        ContractError::UnauthorizedSource {
            address: from.into_string(),
        }
    );

    let proxy = LOCK_PROXY
        .may_load(deps.storage)?
        .ok_or(ContractError::ProxyNotSet)?;

    let net_amount = amount
        .checked_sub(fee)
        .map_err(|_| ContractError::FeeExceedsAmount { fee, amount })?;

    let mut messages: Vec<CosmosMsg> = vec![];
    match &from_asset {
        AssetInfo::Native { denom } => {
            // The fee rides along as attached funds and stays with the
            // gateway; nothing to attach when the fee is zero.
            let attached: Uint128 = info
                .funds
                .iter()
                .filter(|c| c.denom == *denom)
                .map(|c| c.amount)
                .sum();
            ensure!(
                attached == fee,
                ContractError::FeeMismatch {
                    denom: denom.clone(),
                    expected: fee,
                    got: attached,
                }
            );
            ensure!(
                info.funds.iter().all(|c| c.denom == *denom),
                ContractError::UnexpectedFunds
            );
        }
        AssetInfo::Cw20 { contract_addr } => {
            ensure!(info.funds.is_empty(), ContractError::UnexpectedFunds);
            if !fee.is_zero() {
                messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: contract_addr.to_string(),
                    msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                        owner: from.to_string(),
                        recipient: env.contract.address.to_string(),
                        amount: fee,
                    })?,
                    funds: vec![],
                }));
            }
        }
    }

    let asset_label = from_asset.to_string();
    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: proxy.to_string(),
        msg: to_json_binary(&LockProxyExecuteMsg::Lock {
            from_asset,
            from_address: from.to_string(),
            to_chain_id,
            to_address: to_address.clone(),
            amount: net_amount,
        })?,
        funds: vec![],
    }));

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "lock")
        .add_attribute("from_asset", asset_label)
        .add_attribute("from_address", from)
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("to_address", to_address.to_base64())
        .add_attribute("amount", net_amount.to_string())
        .add_attribute("fee", fee.to_string())
        .add_attribute("request_id", request_id.to_string()))
}
