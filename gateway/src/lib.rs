//! Lock-Proxy Gateway Contract - Administrative Front for Cross-Chain Locking
//!
//! This contract sits in front of a lock-proxy contract that performs the
//! actual cross-chain asset lock. It owns the administrative surface the
//! proxy itself does not have.
//!
//! # Flow
//! 1. A user calls `Lock` with an asset, destination, amount, and fee
//! 2. The gateway collects the fee into its own account
//! 3. The net amount is forwarded to the configured lock proxy, which
//!    initiates the cross-chain transfer
//! 4. The fee collector periodically sweeps accumulated fees out
//!
//! # Security
//! - Single-owner authorization for all configuration changes
//! - Emergency pause blocking `Lock` while leaving administration available
//! - Fee extraction gated on the fee collector identity, not the owner

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
