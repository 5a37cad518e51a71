//! # Inbound Ports (Driving Ports / API)
//!
//! Capabilities handed to the transaction builder. The builder first calls
//! an [`AuthorizationFunction`] with its base account, then calls the
//! installed [`SigningFunction`] once per payload it needs signed.
//!
//! Implementations must be thread-safe (`Send + Sync`).

use crate::domain::entities::{AuthorizedAccount, BaseAccount, CompositeSignature, Signable};
use crate::domain::errors::SigningError;

/// Signs opaque messages for one account key.
pub trait SigningFunction: Send + Sync {
    /// Produce a composite signature over `signable.message`.
    ///
    /// # Errors
    /// * `SigningError::InvalidMessage` - message is not hex
    /// * `SigningError::SigningFailed` - curve operation failed
    fn sign(&self, signable: &Signable) -> Result<CompositeSignature, SigningError>;
}

/// Turns a base account into one that can sign for a specific account key.
pub trait AuthorizationFunction: Send + Sync {
    /// Override the identity fields of `account` and install a signing function.
    fn authorize(&self, account: BaseAccount) -> AuthorizedAccount;
}
