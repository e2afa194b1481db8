//! Fee extraction handler.

use common::AssetInfo;
use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::execute::assert_collector;

/// Sweep the gateway's entire balance of `asset` to the fee collector.
///
/// Fees accrue in the gateway's own account between sweeps; there is no
/// separate accrued-fee counter, so the sweep also drains any balance of
/// the asset the gateway holds for other reasons.
pub fn execute_extract_fee(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    let collector = assert_collector(deps.storage, &info.sender)?;

    let balance = asset.query_balance(&deps.querier, &env.contract.address)?;
    ensure!(
        !balance.is_zero(),
        ContractError::NothingToExtract {
            asset: asset.to_string(),
        }
    );

    let msg = asset.transfer_msg(&collector, balance)?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "extract_fee")
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", balance.to_string())
        .add_attribute("fee_collector", collector))
}
