//! # Domain Entities
//!
//! Requests accepted by the gateway and values it returns.

use fg_02_receipt_reconstruction::TransactionReceipt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{AccountAddress, NetworkName, TransactionStatusPayload};
use std::fmt;

// =============================================================================
// TOKENS
// =============================================================================

/// A fungible token contract and the account paths of its vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    /// Contract name, e.g. `FlowToken`.
    pub identifier: String,
    /// Account the contract is deployed to.
    pub contract_address: AccountAddress,
    /// e.g. `/storage/flowTokenVault`
    pub storage_path: String,
    /// e.g. `/public/flowTokenReceiver`
    pub receiver_path: String,
    /// e.g. `/public/flowTokenBalance`
    pub balance_path: String,
}

impl TokenDescriptor {
    /// The native FLOW token.
    pub fn flow_token(network: NetworkName) -> Self {
        let contract_address = match network {
            NetworkName::Mainnet => [0x16, 0x54, 0x65, 0x33, 0x99, 0x04, 0x0a, 0x61],
            NetworkName::Testnet => [0x7e, 0x60, 0xdf, 0x04, 0x2a, 0x9c, 0x08, 0x68],
        };
        Self {
            identifier: "FlowToken".to_string(),
            contract_address: AccountAddress::from_bytes(contract_address),
            storage_path: "/storage/flowTokenVault".to_string(),
            receiver_path: "/public/flowTokenReceiver".to_string(),
            balance_path: "/public/flowTokenBalance".to_string(),
        }
    }

    /// The FUSD stablecoin.
    pub fn fusd(network: NetworkName) -> Self {
        let contract_address = match network {
            NetworkName::Mainnet => [0x3c, 0x59, 0x59, 0xb5, 0x68, 0x89, 0x63, 0x93],
            NetworkName::Testnet => [0xe2, 0x23, 0xd8, 0xa6, 0x29, 0xe4, 0x9c, 0x68],
        };
        Self {
            identifier: "FUSD".to_string(),
            contract_address: AccountAddress::from_bytes(contract_address),
            storage_path: "/storage/fusdVault".to_string(),
            receiver_path: "/public/fusdReceiver".to_string(),
            balance_path: "/public/fusdBalance".to_string(),
        }
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Balance lookup for one account and token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceQuery {
    /// Account to query, with or without `0x`.
    pub wallet_address: String,
    pub token: TokenDescriptor,
}

/// A fungible token transfer signed by the sender's key at index 0.
#[derive(Clone)]
pub struct TransferRequest {
    /// Receiving account, with or without `0x`.
    pub recipient: String,
    /// Sending account, with or without `0x`. Also pays the fee.
    pub from_wallet_address: String,
    /// Decimal amount, at most 8 fractional digits.
    pub amount: String,
    /// Hex secp256k1 private key for the sender's key 0.
    pub private_key: String,
    pub token: TokenDescriptor,
}

impl fmt::Debug for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferRequest")
            .field("recipient", &self.recipient)
            .field("from_wallet_address", &self.from_wallet_address)
            .field("amount", &self.amount)
            .field("private_key", &"<redacted>")
            .field("token", &self.token.identifier)
            .finish()
    }
}

// =============================================================================
// SCRIPT ARGUMENTS
// =============================================================================

/// Argument to a script or transaction, encoded as Cadence JSON
/// (`{"type": "Address", "value": "0x..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ScriptArgument {
    Address(AccountAddress),
    /// Fixed-point decimal rendered with exactly 8 fractional digits.
    UFix64(String),
}

// =============================================================================
// RESPONSES
// =============================================================================

/// A receipt together with the raw payload it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub receipt: TransactionReceipt,
    pub transaction_data: TransactionStatusPayload,
}

/// Fee schedule in the network's fee currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStats {
    pub fee_crypto_currency: String,
    pub base_fee: Decimal,
    pub low_fee_charged: Decimal,
    pub standard_fee_charged: Decimal,
    pub fast_fee_charged: Decimal,
    pub max_fee_charged: Decimal,
}
