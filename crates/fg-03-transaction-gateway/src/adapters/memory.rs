//! # In-Memory Access Node
//!
//! `AccessNodeGateway` backed by process memory. Submitted transactions are
//! authorized and signed exactly as a real transaction builder would, then
//! immediately given the configured sealed status. A sealed status of
//! Expired (5) makes the seal wait fail instead.

use crate::domain::{AccessNodeError, ScriptArgument};
use crate::ports::outbound::{AccessNodeGateway, TransactionRequest};
use async_trait::async_trait;
use fg_01_transaction_signing::{
    AccountRole, AuthorizationFunction, BaseAccount, CompositeSignature, Signable,
};
use parking_lot::{Mutex, RwLock};
use shared_types::{AccountAddress, TransactionId, TransactionStatusPayload};

const EXPIRED_STATUS: i64 = 5;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Domain tag prepended to every signed transaction payload.
const TRANSACTION_DOMAIN_TAG: &[u8] = b"FLOW-V0.0-transaction";
const DOMAIN_TAG_LENGTH: usize = 32;

/// A transaction accepted by [`InMemoryAccessNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTransaction {
    pub tx_id: TransactionId,
    pub script: String,
    pub arguments: Vec<ScriptArgument>,
    pub compute_limit: u64,
    /// Hex message each role signed.
    pub message: String,
    pub proposer_signature: CompositeSignature,
    pub payer_signature: CompositeSignature,
    pub authorizer_signatures: Vec<CompositeSignature>,
}

#[derive(Default)]
struct NodeState {
    next_tx: u64,
    statuses: HashMap<TransactionId, TransactionStatusPayload>,
    submissions: Vec<SubmittedTransaction>,
}

/// Access node held entirely in memory.
#[derive(Default)]
pub struct InMemoryAccessNode {
    accounts: RwLock<HashSet<AccountAddress>>,
    script_result: RwLock<Option<serde_json::Value>>,
    sealed_result: RwLock<TransactionStatusPayload>,
    failure: RwLock<Option<AccessNodeError>>,
    state: Mutex<NodeState>,
}

impl InMemoryAccessNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing account.
    pub fn with_account(self, address: AccountAddress) -> Self {
        self.accounts.write().insert(address);
        self
    }

    /// Value returned by every script execution.
    pub fn with_script_result(self, value: serde_json::Value) -> Self {
        *self.script_result.write() = Some(value);
        self
    }

    /// Status given to each submitted transaction once sealed.
    pub fn with_sealed_result(self, payload: TransactionStatusPayload) -> Self {
        *self.sealed_result.write() = payload;
        self
    }

    /// Known transaction status.
    pub fn with_status(self, tx_id: TransactionId, payload: TransactionStatusPayload) -> Self {
        self.state.lock().statuses.insert(tx_id, payload);
        self
    }

    /// Make every call fail with `error` until cleared.
    pub fn fail_with(&self, error: Option<AccessNodeError>) {
        *self.failure.write() = error;
    }

    /// Transactions submitted so far, oldest first.
    pub fn submissions(&self) -> Vec<SubmittedTransaction> {
        self.state.lock().submissions.clone()
    }

    fn check_failure(&self) -> Result<(), AccessNodeError> {
        match self.failure.read().as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn lookup(&self, tx_id: &TransactionId) -> Result<TransactionStatusPayload, AccessNodeError> {
        self.state
            .lock()
            .statuses
            .get(tx_id)
            .cloned()
            .ok_or_else(|| AccessNodeError::NotFound(tx_id.to_string()))
    }
}

/// Hex of the domain-tagged canonical encoding of a request.
fn signable_message(request: &TransactionRequest) -> Result<String, AccessNodeError> {
    let arguments = serde_json::to_vec(&request.arguments)
        .map_err(|e| AccessNodeError::Rejected(e.to_string()))?;

    let mut payload = Vec::with_capacity(
        DOMAIN_TAG_LENGTH + request.script.len() + arguments.len() + 8,
    );
    payload.extend_from_slice(TRANSACTION_DOMAIN_TAG);
    payload.resize(DOMAIN_TAG_LENGTH, 0);
    payload.extend_from_slice(request.script.as_bytes());
    payload.extend_from_slice(&arguments);
    payload.extend_from_slice(&request.compute_limit.to_be_bytes());
    Ok(hex::encode(payload))
}

fn sign_as(
    authorization: &Arc<dyn AuthorizationFunction>,
    role: AccountRole,
    message: &str,
) -> Result<CompositeSignature, AccessNodeError> {
    let account = authorization.authorize(BaseAccount {
        kind: Some("ACCOUNT".to_string()),
        role,
        ..BaseAccount::default()
    });
    account
        .sign(&Signable::new(message))
        .map_err(|e| AccessNodeError::Rejected(e.to_string()))
}

#[async_trait]
impl AccessNodeGateway for InMemoryAccessNode {
    async fn account_exists(&self, address: &AccountAddress) -> Result<bool, AccessNodeError> {
        self.check_failure()?;
        Ok(self.accounts.read().contains(address))
    }

    async fn execute_script(
        &self,
        _script: String,
        _arguments: Vec<ScriptArgument>,
    ) -> Result<serde_json::Value, AccessNodeError> {
        self.check_failure()?;
        self.script_result
            .read()
            .clone()
            .ok_or_else(|| AccessNodeError::Rejected("no script result configured".to_string()))
    }

    async fn submit_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<TransactionId, AccessNodeError> {
        self.check_failure()?;

        let message = signable_message(&request)?;
        let proposer_signature = sign_as(
            &request.proposer,
            AccountRole {
                proposer: true,
                ..AccountRole::default()
            },
            &message,
        )?;
        let payer_signature = sign_as(
            &request.payer,
            AccountRole {
                payer: true,
                ..AccountRole::default()
            },
            &message,
        )?;
        let authorizer_signatures = request
            .authorizations
            .iter()
            .map(|auth| {
                sign_as(
                    auth,
                    AccountRole {
                        authorizer: true,
                        ..AccountRole::default()
                    },
                    &message,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let sealed = self.sealed_result.read().clone();
        let mut state = self.state.lock();
        state.next_tx += 1;
        let tx_id = TransactionId::new(format!("{:064x}", state.next_tx));

        state.statuses.insert(tx_id.clone(), sealed);
        state.submissions.push(SubmittedTransaction {
            tx_id: tx_id.clone(),
            script: request.script,
            arguments: request.arguments,
            compute_limit: request.compute_limit,
            message,
            proposer_signature,
            payer_signature,
            authorizer_signatures,
        });

        Ok(tx_id)
    }

    async fn wait_until_sealed(
        &self,
        tx_id: &TransactionId,
    ) -> Result<TransactionStatusPayload, AccessNodeError> {
        self.check_failure()?;
        let payload = self.lookup(tx_id)?;
        if payload.status == EXPIRED_STATUS {
            return Err(AccessNodeError::Expired(tx_id.to_string()));
        }
        Ok(payload)
    }

    async fn get_transaction_status(
        &self,
        tx_id: &TransactionId,
    ) -> Result<TransactionStatusPayload, AccessNodeError> {
        self.check_failure()?;
        self.lookup(tx_id)
    }
}
