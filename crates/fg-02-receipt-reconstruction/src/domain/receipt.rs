//! # Receipt Construction
//!
//! Combines decoded status flags and extracted event fields into an
//! immutable [`TransactionReceipt`].
//!
//! Fields the events cannot supply are `None` and serialize as `null`.
//! `gasPrice`, `gasLimit` and `nonce` have no meaning on Flow and are
//! always `None`.

use super::events::EventExtractor;
use super::status::{decode_payload, OutcomeFlags};
use crate::ports::outbound::{SystemTimeSource, TimeSource};
use chrono::{DateTime, Utc};
use flow_telemetry::{metric_inc, RECEIPTS_BUILT, RECEIPT_FIELDS_UNAVAILABLE};
use rust_decimal::Decimal;
use serde::Serialize;
use shared_types::{NetworkConfig, NetworkName, TransactionId, TransactionStatusPayload};

/// Receipt for one transaction.
///
/// `date` is the wall-clock time at construction, not chain time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    transaction_hash: TransactionId,
    transaction_link: String,
    network: NetworkName,
    gas_price: Option<Decimal>,
    gas_limit: Option<u64>,
    gas_cost_in_crypto: Option<Decimal>,
    gas_cost_crypto_currency: String,
    amount: Option<Decimal>,
    from: Option<String>,
    to: Option<String>,
    nonce: Option<u64>,
    date: DateTime<Utc>,
    #[serde(flatten)]
    flags: OutcomeFlags,
}

impl TransactionReceipt {
    pub fn transaction_hash(&self) -> &TransactionId {
        &self.transaction_hash
    }

    pub fn transaction_link(&self) -> &str {
        &self.transaction_link
    }

    pub fn network(&self) -> NetworkName {
        self.network
    }

    pub fn gas_price(&self) -> Option<Decimal> {
        self.gas_price
    }

    pub fn gas_limit(&self) -> Option<u64> {
        self.gas_limit
    }

    pub fn gas_cost_in_crypto(&self) -> Option<Decimal> {
        self.gas_cost_in_crypto
    }

    pub fn gas_cost_crypto_currency(&self) -> &str {
        &self.gas_cost_crypto_currency
    }

    pub fn amount(&self) -> Option<Decimal> {
        self.amount
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    pub fn nonce(&self) -> Option<u64> {
        self.nonce
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn flags(&self) -> &OutcomeFlags {
        &self.flags
    }

    pub fn is_executed(&self) -> bool {
        self.flags.is_executed
    }

    pub fn is_successful(&self) -> bool {
        self.flags.is_successful
    }

    pub fn is_failed(&self) -> bool {
        self.flags.is_failed
    }

    pub fn is_invalid(&self) -> bool {
        self.flags.is_invalid
    }

    pub fn is_pending(&self) -> bool {
        self.flags.is_pending
    }
}

/// Builds receipts for one network.
#[derive(Debug, Clone)]
pub struct ReceiptBuilder<T: TimeSource = SystemTimeSource> {
    network: NetworkConfig,
    clock: T,
}

impl ReceiptBuilder<SystemTimeSource> {
    pub fn new(network: NetworkConfig) -> Self {
        Self::with_time_source(network, SystemTimeSource)
    }
}

impl<T: TimeSource> ReceiptBuilder<T> {
    /// Create a builder that stamps receipts using `clock`.
    pub fn with_time_source(network: NetworkConfig, clock: T) -> Self {
        Self { network, clock }
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Build a receipt from a status payload. Never fails.
    pub fn build(&self, tx_id: &TransactionId, payload: &TransactionStatusPayload) -> TransactionReceipt {
        let flags = decode_payload(payload);
        let extractor = EventExtractor::new(&payload.events, &self.network.events);

        let receipt = TransactionReceipt {
            transaction_hash: tx_id.clone(),
            transaction_link: self.network.transaction_link(tx_id),
            network: self.network.name,
            gas_price: None,
            gas_limit: None,
            gas_cost_in_crypto: extractor.gas_cost(),
            gas_cost_crypto_currency: self.network.fee_currency.clone(),
            amount: extractor.transfer_amount(),
            from: extractor.sender_address(),
            to: extractor.receiver_address(),
            nonce: None,
            date: self.clock.now(),
            flags,
        };

        record_receipt(&receipt);
        tracing::debug!(
            tx_id = %tx_id,
            network = %receipt.network,
            outcome = flags.label(),
            events = payload.events.len(),
            "Receipt built"
        );

        receipt
    }
}

fn record_receipt(receipt: &TransactionReceipt) {
    metric_inc!(RECEIPTS_BUILT, &[receipt.flags.label()]);

    let unavailable = [
        ("gas_cost", receipt.gas_cost_in_crypto.is_none()),
        ("amount", receipt.amount.is_none()),
        ("from", receipt.from.is_none()),
        ("to", receipt.to.is_none()),
    ];
    for (field, missing) in unavailable {
        if missing {
            metric_inc!(RECEIPT_FIELDS_UNAVAILABLE, &[field]);
        }
    }
}
