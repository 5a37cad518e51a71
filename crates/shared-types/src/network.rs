//! # Network Configuration
//!
//! Per-network settings passed explicitly to every subsystem constructor.
//!
//! | Network | Access node | Explorer | FungibleToken |
//! |---------|-------------|----------|---------------|
//! | mainnet | `https://rest-mainnet.onflow.org` | `https://flowscan.org` | `0xf233dcee88fe0abe` |
//! | testnet | `https://rest-testnet.onflow.org` | `https://testnet.flowscan.org` | `0x9a0766d93b6608b7` |

use crate::entities::{AccountAddress, TransactionId};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Currency symbol used for fees and native transfers.
pub const NATIVE_CURRENCY: &str = "FLOW";

/// Supported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    Mainnet,
    Testnet,
}

impl NetworkName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Event type identifiers matched by containment against `LedgerEvent::event_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventIdentifiers {
    /// Fee deduction event, carries the fee in `amount`.
    pub fee_deducted: String,
    /// Token withdrawal event, carries `amount` and `from`.
    pub tokens_withdrawn: String,
    /// Token deposit event, carries `amount` and `to`.
    pub tokens_deposited: String,
}

impl Default for EventIdentifiers {
    fn default() -> Self {
        Self {
            fee_deducted: "FlowFees.FeesDeducted".to_string(),
            tokens_withdrawn: "FlowToken.TokensWithdrawn".to_string(),
            tokens_deposited: "FlowToken.TokensDeposited".to_string(),
        }
    }
}

/// Configuration for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network name.
    pub name: NetworkName,
    /// Access node REST endpoint. Read by network transport adapters; the
    /// in-process adapters ignore it.
    pub access_node_url: String,
    /// Block explorer base URL (no trailing slash).
    pub explorer_url: String,
    /// Address of the FungibleToken standard contract.
    pub fungible_token_address: AccountAddress,
    /// Currency symbol for fees and native amounts.
    pub fee_currency: String,
    /// Event identifiers used when reading receipts.
    #[serde(default)]
    pub events: EventIdentifiers,
}

impl NetworkConfig {
    pub fn mainnet() -> Self {
        Self {
            name: NetworkName::Mainnet,
            access_node_url: "https://rest-mainnet.onflow.org".to_string(),
            explorer_url: "https://flowscan.org".to_string(),
            fungible_token_address: AccountAddress::from_bytes([
                0xf2, 0x33, 0xdc, 0xee, 0x88, 0xfe, 0x0a, 0xbe,
            ]),
            fee_currency: NATIVE_CURRENCY.to_string(),
            events: EventIdentifiers::default(),
        }
    }

    pub fn testnet() -> Self {
        Self {
            name: NetworkName::Testnet,
            access_node_url: "https://rest-testnet.onflow.org".to_string(),
            explorer_url: "https://testnet.flowscan.org".to_string(),
            fungible_token_address: AccountAddress::from_bytes([
                0x9a, 0x07, 0x66, 0xd9, 0x3b, 0x66, 0x08, 0xb7,
            ]),
            fee_currency: NATIVE_CURRENCY.to_string(),
            events: EventIdentifiers::default(),
        }
    }

    /// Default configuration for a named network.
    pub fn for_network(name: NetworkName) -> Self {
        match name {
            NetworkName::Mainnet => Self::mainnet(),
            NetworkName::Testnet => Self::testnet(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FG_NETWORK`: `mainnet`/`main` or `testnet` (default: testnet)
    /// - `FG_ACCESS_NODE_URL`: overrides the access node endpoint
    pub fn from_env() -> Result<Self, ConfigError> {
        let name = match env::var("FG_NETWORK") {
            Ok(raw) => raw.parse()?,
            Err(_) => NetworkName::Testnet,
        };

        let mut config = Self::for_network(name);
        if let Ok(url) = env::var("FG_ACCESS_NODE_URL") {
            tracing::debug!(network = %name, access_node_url = %url, "Access node override");
            config.access_node_url = url;
        }
        Ok(config)
    }

    /// Explorer link for a transaction.
    pub fn transaction_link(&self, tx_id: &TransactionId) -> String {
        format!("{}/transaction/{}", self.explorer_url, tx_id)
    }

    /// Explorer link for an account.
    pub fn wallet_link(&self, address: &AccountAddress) -> String {
        format!("{}/account/{}", self.explorer_url, address.with_prefix())
    }
}
