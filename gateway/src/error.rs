//! Error types for the gateway contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only fee collector can extract fees")]
    UnauthorizedCollector,

    #[error("Unauthorized: caller does not hold authority over {address}")]
    UnauthorizedSource { address: String },

    #[error("Gateway is paused")]
    Paused,

    #[error("Lock proxy is not set")]
    ProxyNotSet,

    #[error("Fee {fee} exceeds amount {amount}")]
    FeeExceedsAmount { fee: Uint128, amount: Uint128 },

    #[error("Attached {denom} does not match declared fee: expected {expected}, got {got}")]
    FeeMismatch {
        denom: String,
        expected: Uint128,
        got: Uint128,
    },

    #[error("Unexpected funds attached to call")]
    UnexpectedFunds,

    #[error("No {asset} balance to extract")]
    NothingToExtract { asset: String },
}
