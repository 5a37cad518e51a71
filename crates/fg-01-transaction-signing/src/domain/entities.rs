//! # Domain Entities
//!
//! Account and signature shapes exchanged with the transaction builder that
//! submits to the access node.

use super::errors::SigningError;
use crate::ports::inbound::SigningFunction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Roles an account plays in a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRole {
    pub proposer: bool,
    pub authorizer: bool,
    pub payer: bool,
    pub param: bool,
}

/// Account value supplied by the transaction builder before authorization.
///
/// Only `temp_id`, `addr` and `key_id` are overridden by an authorization
/// function. Every other field, including ones this crate does not know
/// about (kept in `extra`), passes through unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_num: Option<u64>,
    #[serde(default)]
    pub role: AccountRole,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payload handed to a signing function.
///
/// `message` is the hex encoding of the bytes to sign; its structure
/// (domain tag, encoded transaction) is defined by the network.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Signable {
    pub message: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Signable {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Signature returned to the transaction builder.
///
/// `signature` is always 128 hex characters: `r || s`, each left-padded to
/// 32 bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeSignature {
    /// Signer address with the `0x` prefix.
    pub address: String,
    /// Account key index used to sign.
    pub key_id: u32,
    /// Hex-encoded `r || s`.
    pub signature: String,
}

/// Base account after authorization: identity fields overridden and a
/// signing function installed.
#[derive(Clone)]
pub struct AuthorizedAccount {
    pub account: BaseAccount,
    pub signing_function: Arc<dyn SigningFunction>,
}

impl AuthorizedAccount {
    /// Sign through the installed signing function.
    pub fn sign(&self, signable: &Signable) -> Result<CompositeSignature, SigningError> {
        self.signing_function.sign(signable)
    }
}

impl fmt::Debug for AuthorizedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedAccount")
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}
