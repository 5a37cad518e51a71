//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Accounts**: `AccountAddress`, `AccountIdentity`
//! - **Transactions**: `TransactionId`, `TransactionStatusPayload`
//! - **Events**: `LedgerEvent`

use crate::errors::AddressError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CLUSTER A: ACCOUNTS
// =============================================================================

/// Number of bytes in an account address.
pub const ADDRESS_LENGTH: usize = 8;

/// Canonical 8-byte account address.
///
/// Parsed from 16 hex digits with or without a `0x` prefix. Both renderings
/// are derived from the same bytes so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; ADDRESS_LENGTH]);

impl AccountAddress {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Hex rendering without the network prefix, e.g. `73c05de1c4223787`.
    pub fn sans_prefix(&self) -> String {
        hex::encode(self.0)
    }

    /// Hex rendering with the `0x` prefix, e.g. `0x73c05de1c4223787`.
    pub fn with_prefix(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.is_empty() {
            return Err(AddressError::MissingDigits);
        }
        if digits.len() != ADDRESS_LENGTH * 2 {
            return Err(AddressError::InvalidLength {
                actual: digits.len(),
            });
        }

        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.with_prefix())
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.with_prefix())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The account and registered key a signer acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdentity {
    /// Account address.
    pub address: AccountAddress,
    /// Index of the account key used for signing.
    pub key_index: u32,
}

impl AccountIdentity {
    pub fn new(address: AccountAddress, key_index: u32) -> Self {
        Self { address, key_index }
    }
}

// =============================================================================
// CLUSTER B: TRANSACTIONS
// =============================================================================

/// Transaction identifier as reported by the access node (hex string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw transaction result as returned by the access node.
///
/// `status` is the lifecycle code (0..=5), `status_code` the execution result
/// code, meaningful only once the transaction is sealed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusPayload {
    pub status: i64,
    #[serde(default)]
    pub status_code: i64,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub events: Vec<LedgerEvent>,
}

// =============================================================================
// CLUSTER C: EVENTS
// =============================================================================

/// An event emitted during transaction execution.
///
/// `event_type` is the fully-qualified name, e.g.
/// `A.912d5440f7e3769e.FlowFees.FeesDeducted`. Amounts in `data` are decimal
/// strings; addresses are `0x`-prefixed strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_index: Option<u64>,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl LedgerEvent {
    /// Create an event with the given type and data fields.
    pub fn new(
        event_type: impl Into<String>,
        data: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            data,
            ..Self::default()
        }
    }

    /// Look up a string field in `data`.
    pub fn data_str(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(serde_json::Value::as_str)
    }
}
