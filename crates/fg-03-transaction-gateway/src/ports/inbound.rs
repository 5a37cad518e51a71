//! # Inbound Ports (Driving Ports / API)
//!
//! Operations the gateway offers to its callers.

use crate::domain::{BalanceQuery, FeeStats, GatewayError, TransactionResponse, TransferRequest};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared_types::{AccountAddress, NetworkConfig, TransactionId};

/// Token balances, transfers and receipts on one network.
#[async_trait]
pub trait TransactionGatewayApi: Send + Sync {
    /// Network this gateway talks to.
    fn network(&self) -> &NetworkConfig;

    /// Explorer link for a transaction.
    fn transaction_link(&self, tx_id: &TransactionId) -> String;

    /// Explorer link for an account.
    fn wallet_link(&self, address: &AccountAddress) -> String;

    /// `true` only if `address` is well formed and the account exists.
    /// Never fails.
    async fn is_valid_wallet_address(&self, address: &str) -> bool;

    /// Token balance of an account.
    async fn get_balance(&self, query: BalanceQuery) -> Result<Decimal, GatewayError>;

    /// Current fee schedule.
    fn get_fee_stats(&self) -> FeeStats;

    /// Receipt for an existing transaction.
    async fn get_transaction(&self, tx_id: &TransactionId)
        -> Result<TransactionResponse, GatewayError>;

    /// Sign and submit a transfer, wait for it to seal and return its receipt.
    async fn send_transaction(
        &self,
        request: TransferRequest,
    ) -> Result<TransactionResponse, GatewayError>;
}
