//! # Transaction Gateway Subsystem (fg-03)
//!
//! Wallet checks, token balances, fee schedule, transfers and receipt
//! lookups against a Flow access node.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): requests, Cadence templates, fees, errors
//! - **Ports Layer** (`ports/`):
//!   - Inbound: `TransactionGatewayApi`
//!   - Outbound: `AccessNodeGateway`
//! - **Adapters** (`adapters/`): `InMemoryAccessNode`
//! - **Service Layer** (`service.rs`): `TransactionGatewayService`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fg_03_transaction_gateway::{TransactionGatewayApi, TransactionGatewayService};
//!
//! let gateway = TransactionGatewayService::new(NetworkConfig::from_env()?, node);
//! let response = gateway.send_transaction(request).await?;
//! println!("{}", response.receipt.transaction_link());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::InMemoryAccessNode;
pub use domain::{
    AccessNodeError, AmountError, BalanceQuery, FeeStats, GatewayError, ScriptArgument,
    TokenDescriptor, TransactionResponse, TransferRequest,
};
pub use ports::inbound::TransactionGatewayApi;
pub use ports::outbound::{AccessNodeGateway, TransactionRequest};
pub use service::{TransactionGatewayService, SIGNING_KEY_INDEX, TRANSFER_COMPUTE_LIMIT};
