//! # Signing Errors
//!
//! Error types for signer construction and signing operations.

use thiserror::Error;

/// Errors that can occur while creating a signer or producing a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// The private key is not hex or is not a valid secp256k1 scalar.
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// The signable message is not valid hex.
    #[error("Invalid signable message: {0}")]
    InvalidMessage(String),

    /// The curve operation failed on an otherwise valid key.
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

impl SigningError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidKey(_) => "invalid_key",
            Self::InvalidMessage(_) => "invalid_message",
            Self::SigningFailed(_) => "curve",
        }
    }
}
