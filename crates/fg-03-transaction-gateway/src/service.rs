//! # Transaction Gateway Service
//!
//! Implements `TransactionGatewayApi` over an `AccessNodeGateway`.
//!
//! ## Submission flow
//!
//! 1. Parse both addresses and normalize the amount to UFix64
//! 2. Create a signer for the sender's key 0
//! 3. Submit with the signer as proposer, payer and sole authorizer
//! 4. Wait for sealing, then build the receipt from the sealed status

use crate::domain::{
    balance_script, fee_stats, format_ufix64, normalize_amount, transfer_script, BalanceQuery,
    FeeStats, GatewayError, ScriptArgument, TransactionResponse, TransferRequest,
};
use crate::ports::inbound::TransactionGatewayApi;
use crate::ports::outbound::{AccessNodeGateway, TransactionRequest};
use async_trait::async_trait;
use fg_01_transaction_signing::{create_signer, AuthorizationFunction};
use fg_02_receipt_reconstruction::{ReceiptBuilder, SystemTimeSource, TimeSource};
use flow_telemetry::{
    metric_inc, HistogramTimer, GATEWAY_ERRORS, SEAL_WAIT_DURATION, TRANSACTIONS_SUBMITTED,
};
use rust_decimal::Decimal;
use shared_types::{
    AccountAddress, AccountIdentity, NetworkConfig, TransactionId, TransactionStatusPayload,
};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Compute limit attached to every transfer.
pub const TRANSFER_COMPUTE_LIMIT: u64 = 100;

/// Account key used to sign transfers.
pub const SIGNING_KEY_INDEX: u32 = 0;

/// Length of an address once `0x`-prefixed.
const PREFIXED_ADDRESS_LENGTH: usize = 18;

/// Gateway service for one network.
pub struct TransactionGatewayService<G: AccessNodeGateway, T: TimeSource = SystemTimeSource> {
    node: Arc<G>,
    receipts: ReceiptBuilder<T>,
}

impl<G: AccessNodeGateway> TransactionGatewayService<G> {
    pub fn new(network: NetworkConfig, node: Arc<G>) -> Self {
        Self {
            node,
            receipts: ReceiptBuilder::new(network),
        }
    }
}

impl<G: AccessNodeGateway, T: TimeSource> TransactionGatewayService<G, T> {
    /// Create with a custom receipt builder (e.g. a fixed clock).
    pub fn with_receipt_builder(node: Arc<G>, receipts: ReceiptBuilder<T>) -> Self {
        Self { node, receipts }
    }

    fn respond(&self, tx_id: &TransactionId, payload: TransactionStatusPayload) -> TransactionResponse {
        TransactionResponse {
            receipt: self.receipts.build(tx_id, &payload),
            transaction_data: payload,
        }
    }

    async fn fetch_balance(&self, query: BalanceQuery) -> Result<Decimal, GatewayError> {
        let address: AccountAddress = query.wallet_address.parse()?;
        let script = balance_script(&query.token, &self.receipts.network().fungible_token_address);

        let value = self
            .node
            .execute_script(script, vec![ScriptArgument::Address(address)])
            .await?;
        let balance = parse_balance(&value)?;

        tracing::debug!(
            address = %address,
            token = %query.token.identifier,
            %balance,
            "Balance fetched"
        );
        Ok(balance)
    }

    async fn submit_transfer(
        &self,
        request: TransferRequest,
        correlation_id: Uuid,
    ) -> Result<TransactionResponse, GatewayError> {
        let recipient: AccountAddress = request.recipient.parse()?;
        let sender: AccountAddress = request.from_wallet_address.parse()?;
        let amount = normalize_amount(&request.amount)?;

        let signer: Arc<dyn AuthorizationFunction> = Arc::new(create_signer(
            &request.private_key,
            AccountIdentity::new(sender, SIGNING_KEY_INDEX),
        )?);

        let fungible_token = &self.receipts.network().fungible_token_address;
        let transaction = TransactionRequest {
            script: transfer_script(&request.token, fungible_token),
            arguments: vec![
                ScriptArgument::Address(recipient),
                ScriptArgument::UFix64(format_ufix64(amount)),
            ],
            proposer: Arc::clone(&signer),
            payer: Arc::clone(&signer),
            authorizations: vec![signer],
            compute_limit: TRANSFER_COMPUTE_LIMIT,
        };

        let tx_id = self.node.submit_transaction(transaction).await?;
        metric_inc!(TRANSACTIONS_SUBMITTED);
        tracing::info!(
            %correlation_id,
            tx_id = %tx_id,
            from = %sender,
            to = %recipient,
            %amount,
            token = %request.token.identifier,
            "Submitted transaction, waiting for seal"
        );

        let timer = HistogramTimer::new(&SEAL_WAIT_DURATION);
        let payload = match self.node.wait_until_sealed(&tx_id).await {
            Ok(payload) => payload,
            Err(e) => {
                timer.discard();
                return Err(e.into());
            }
        };
        tracing::info!(
            %correlation_id,
            tx_id = %tx_id,
            seal_secs = timer.elapsed_secs(),
            "Transaction sealed"
        );
        drop(timer);

        Ok(self.respond(&tx_id, payload))
    }
}

/// Add `0x` when missing.
fn with_prefix(address: &str) -> String {
    let trimmed = address.trim();
    if trimmed.starts_with("0x") {
        trimmed.to_string()
    } else {
        format!("0x{}", trimmed)
    }
}

fn record_error(operation: &'static str) -> impl Fn(&GatewayError) {
    move |e: &GatewayError| {
        metric_inc!(GATEWAY_ERRORS, &[operation]);
        tracing::warn!(operation, kind = e.kind(), error = %e, "Gateway operation failed");
    }
}

/// UFix64 script result, either a decimal string or a JSON number.
fn parse_balance(value: &serde_json::Value) -> Result<Decimal, GatewayError> {
    let parsed = match value {
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).ok(),
        serde_json::Value::Number(n) => {
            let s = n.to_string();
            Decimal::from_str(&s)
                .or_else(|_| Decimal::from_scientific(&s))
                .ok()
        }
        _ => None,
    };
    parsed.ok_or_else(|| GatewayError::MalformedScriptResult(value.to_string()))
}

#[async_trait]
impl<G, T> TransactionGatewayApi for TransactionGatewayService<G, T>
where
    G: AccessNodeGateway + 'static,
    T: TimeSource + 'static,
{
    fn network(&self) -> &NetworkConfig {
        self.receipts.network()
    }

    fn transaction_link(&self, tx_id: &TransactionId) -> String {
        self.network().transaction_link(tx_id)
    }

    fn wallet_link(&self, address: &AccountAddress) -> String {
        self.network().wallet_link(address)
    }

    async fn is_valid_wallet_address(&self, address: &str) -> bool {
        let prefixed = with_prefix(address);
        if prefixed.len() != PREFIXED_ADDRESS_LENGTH {
            return false;
        }
        let Ok(parsed) = prefixed.parse::<AccountAddress>() else {
            return false;
        };

        match self.node.account_exists(&parsed).await {
            Ok(exists) => exists,
            Err(e) => {
                tracing::debug!(address = %parsed, error = %e, "Account lookup failed");
                false
            }
        }
    }

    async fn get_balance(&self, query: BalanceQuery) -> Result<Decimal, GatewayError> {
        self.fetch_balance(query)
            .await
            .inspect_err(record_error("get_balance"))
    }

    fn get_fee_stats(&self) -> FeeStats {
        fee_stats(self.network())
    }

    async fn get_transaction(
        &self,
        tx_id: &TransactionId,
    ) -> Result<TransactionResponse, GatewayError> {
        let payload = self
            .node
            .get_transaction_status(tx_id)
            .await
            .map_err(GatewayError::from)
            .inspect_err(record_error("get_transaction"))?;

        Ok(self.respond(tx_id, payload))
    }

    async fn send_transaction(
        &self,
        request: TransferRequest,
    ) -> Result<TransactionResponse, GatewayError> {
        self.submit_transfer(request, Uuid::new_v4())
            .await
            .inspect_err(record_error("send_transaction"))
    }
}

// =============================================================================
// TESTS
// =============================================================================
