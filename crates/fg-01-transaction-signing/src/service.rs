//! # Transaction Signer
//!
//! Application service that implements both inbound ports for one account key.
//!
//! A signer is constructed once per (address, key index) and may be cloned
//! and shared across threads; clones share the same immutable key material.

use crate::domain::ecdsa;
use crate::domain::entities::{AuthorizedAccount, BaseAccount, CompositeSignature, Signable};
use crate::domain::errors::SigningError;
use crate::ports::inbound::{AuthorizationFunction, SigningFunction};
use flow_telemetry::{metric_inc, SIGNATURES_PRODUCED, SIGNING_FAILURES};
use k256::ecdsa::SigningKey;
use shared_types::AccountIdentity;
use std::fmt;
use std::sync::Arc;

/// Create a signer for `identity` from a hex private key.
///
/// # Errors
/// * `SigningError::InvalidKey` - key is not hex or not a valid secp256k1 scalar
pub fn create_signer(
    private_key_hex: &str,
    identity: AccountIdentity,
) -> Result<TransactionSigner, SigningError> {
    TransactionSigner::new(private_key_hex, identity)
}

/// Authorization capability for one account key.
#[derive(Clone)]
pub struct TransactionSigner {
    key: Arc<SigningKey>,
    identity: AccountIdentity,
}

impl TransactionSigner {
    /// Create a new signer.
    pub fn new(private_key_hex: &str, identity: AccountIdentity) -> Result<Self, SigningError> {
        let key = ecdsa::decode_private_key(private_key_hex).inspect_err(|e| {
            metric_inc!(SIGNING_FAILURES, &[e.reason()]);
        })?;

        tracing::debug!(
            address = %identity.address,
            key_index = identity.key_index,
            "Signer created"
        );

        Ok(Self {
            key: Arc::new(key),
            identity,
        })
    }

    /// Account and key this signer acts for.
    pub fn identity(&self) -> &AccountIdentity {
        &self.identity
    }

    /// Identifier unique to the (address, key index) pair.
    pub fn temp_id(&self) -> String {
        format!(
            "{}-{}",
            self.identity.address.with_prefix(),
            self.identity.key_index
        )
    }

    /// Public key matching the held private key, hex `x || y`.
    pub fn public_key_hex(&self) -> String {
        ecdsa::public_key_hex(&self.key)
    }
}

impl SigningFunction for TransactionSigner {
    fn sign(&self, signable: &Signable) -> Result<CompositeSignature, SigningError> {
        let signature = ecdsa::sign_message_hex(&self.key, &signable.message).inspect_err(|e| {
            metric_inc!(SIGNING_FAILURES, &[e.reason()]);
            tracing::warn!(
                address = %self.identity.address,
                key_index = self.identity.key_index,
                error = %e,
                "Signing failed"
            );
        })?;

        metric_inc!(SIGNATURES_PRODUCED);
        tracing::debug!(
            address = %self.identity.address,
            key_index = self.identity.key_index,
            message_len = signable.message.len(),
            "Message signed"
        );

        Ok(CompositeSignature {
            address: self.identity.address.with_prefix(),
            key_id: self.identity.key_index,
            signature,
        })
    }
}

impl AuthorizationFunction for TransactionSigner {
    fn authorize(&self, account: BaseAccount) -> AuthorizedAccount {
        AuthorizedAccount {
            account: BaseAccount {
                temp_id: Some(self.temp_id()),
                addr: Some(self.identity.address.sans_prefix()),
                key_id: Some(self.identity.key_index),
                ..account
            },
            signing_function: Arc::new(self.clone()),
        }
    }
}

impl fmt::Debug for TransactionSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionSigner")
            .field("identity", &self.identity)
            .field("key", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
