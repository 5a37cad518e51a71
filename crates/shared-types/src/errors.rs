//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors raised when parsing an account address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Nothing left after stripping the `0x` prefix.
    #[error("Address has no digits")]
    MissingDigits,

    /// Address does not have exactly 16 hex digits.
    #[error("Invalid address length: expected 16 hex digits, got {actual}")]
    InvalidLength { actual: usize },

    /// Address contains non-hex characters.
    #[error("Invalid address encoding: {0}")]
    InvalidHex(String),
}

/// Errors raised while resolving network configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Network name is neither mainnet nor testnet.
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}
