//! # Domain Errors
//!
//! Error types for the transaction gateway.

use fg_01_transaction_signing::SigningError;
use shared_types::AddressError;
use thiserror::Error;

/// Failures reported by an access node port.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessNodeError {
    /// Node could not be reached.
    #[error("Access node unreachable: {0}")]
    Unreachable(String),

    /// Account or transaction does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Script or transaction was rejected.
    #[error("Rejected by access node: {0}")]
    Rejected(String),

    /// Transaction expired before sealing.
    #[error("Transaction expired: {0}")]
    Expired(String),
}

/// Amount could not be expressed as a UFix64.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount is not a decimal number: {0}")]
    NotANumber(String),

    #[error("Amount must be greater than zero")]
    NotPositive,

    #[error("Amount has {scale} fractional digits, at most {max} allowed")]
    TooPrecise { scale: u32, max: u32 },

    #[error("Amount exceeds the UFix64 range")]
    OutOfRange,
}

/// Errors returned by gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Invalid address: {0}")]
    Address(#[from] AddressError),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountError),

    #[error("Access node error: {0}")]
    AccessNode(#[from] AccessNodeError),

    /// Script returned something other than a decimal.
    #[error("Malformed script result: {0}")]
    MalformedScriptResult(String),
}

impl GatewayError {
    /// Label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Address(_) => "address",
            Self::Signing(_) => "signing",
            Self::Amount(_) => "amount",
            Self::AccessNode(_) => "access_node",
            Self::MalformedScriptResult(_) => "script_result",
        }
    }
}
