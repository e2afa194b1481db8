//! Common - Shared Types for the Lock-Proxy Gateway Contracts
//!
//! This package provides the type definitions shared between the gateway
//! contract and the downstream lock-proxy contract it forwards to.

pub mod asset;
pub mod proxy;

pub use asset::AssetInfo;
pub use proxy::LockProxyExecuteMsg;
