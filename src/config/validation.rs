//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic parsing: addresses must
//! parse, timeouts must be non-zero, multipliers must be sane. All errors
//! are collected and reported together, not just the first.

use alloy::primitives::Address;
use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single validation failure, tagged with the offending field.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("blockchain.rpc_url '{0}' is not a valid URL")]
    RpcUrl(String),

    #[error("blockchain.rpc_timeout_secs must be greater than zero")]
    RpcTimeout,

    #[error("contract.address '{0}' is not a valid address")]
    ContractAddress(String),

    #[error("contract.address is required")]
    ContractAddressMissing,

    #[error("blockchain.gas_limit_multiplier must be at least 1.0 (got {0})")]
    GasMultiplier(f64),

    #[error("timeouts.request_secs must be greater than zero")]
    RequestTimeout,

    #[error("observability.metrics_address '{0}' is not a valid socket address")]
    MetricsAddress(String),
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.blockchain.rpc_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError::RpcUrl(config.blockchain.rpc_url.clone()));
    }

    if config.blockchain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::RpcTimeout);
    }

    if config.blockchain.gas_limit_multiplier < 1.0 {
        errors.push(ValidationError::GasMultiplier(
            config.blockchain.gas_limit_multiplier,
        ));
    }

    if config.contract.address.is_empty() {
        errors.push(ValidationError::ContractAddressMissing);
    } else if config.contract.address.parse::<Address>().is_err() {
        errors.push(ValidationError::ContractAddress(
            config.contract.address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
