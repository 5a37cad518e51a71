//! # Outbound Ports (Driven Ports)
//!
//! Access node operations the gateway depends on. Transport, retries and
//! polling cadence belong to the adapter.

use crate::domain::{AccessNodeError, ScriptArgument};
use async_trait::async_trait;
use fg_01_transaction_signing::AuthorizationFunction;
use shared_types::{AccountAddress, TransactionId, TransactionStatusPayload};
use std::fmt;
use std::sync::Arc;

/// Transaction ready for submission.
///
/// The builder on the other side of the port calls each authorization
/// function with the matching role and signs through the installed signing
/// function.
#[derive(Clone)]
pub struct TransactionRequest {
    pub script: String,
    pub arguments: Vec<ScriptArgument>,
    pub proposer: Arc<dyn AuthorizationFunction>,
    pub payer: Arc<dyn AuthorizationFunction>,
    pub authorizations: Vec<Arc<dyn AuthorizationFunction>>,
    pub compute_limit: u64,
}

impl fmt::Debug for TransactionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionRequest")
            .field("script_len", &self.script.len())
            .field("arguments", &self.arguments)
            .field("authorizations", &self.authorizations.len())
            .field("compute_limit", &self.compute_limit)
            .finish_non_exhaustive()
    }
}

/// Flow access node.
#[async_trait]
pub trait AccessNodeGateway: Send + Sync {
    /// Whether an account exists at `address`.
    async fn account_exists(&self, address: &AccountAddress) -> Result<bool, AccessNodeError>;

    /// Run a read-only script and return its decoded result.
    async fn execute_script(
        &self,
        script: String,
        arguments: Vec<ScriptArgument>,
    ) -> Result<serde_json::Value, AccessNodeError>;

    /// Build, sign and submit a transaction. Returns its id.
    async fn submit_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionId, AccessNodeError>;

    /// Resolve once the transaction is sealed, with its final status.
    async fn wait_until_sealed(
        &self,
        tx_id: &TransactionId,
    ) -> Result<TransactionStatusPayload, AccessNodeError>;

    /// Current status of a transaction.
    async fn get_transaction_status(
        &self,
        tx_id: &TransactionId,
    ) -> Result<TransactionStatusPayload, AccessNodeError>;
}
