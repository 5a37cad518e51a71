//! # Status Decoding
//!
//! Maps the access node's lifecycle status and execution result code to
//! outcome flags.
//!
//! | status | result code | flags set |
//! |--------|-------------|-----------|
//! | Sealed (4) | 0 | `is_successful`, `is_executed` |
//! | Sealed (4) | non-zero | `is_failed` |
//! | Pending (1) | any | `is_pending` |
//! | Executed (3) | any | `is_executed` |
//! | Expired (5) | any | `is_failed` |
//! | Unknown (0), Finalized (2), anything else | any | `is_pending` |
//!
//! `is_invalid` is never set by this table.

use serde::{Deserialize, Serialize};
use shared_types::TransactionStatusPayload;

/// Lifecycle status reported by the access node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatusCode {
    /// 0
    Unknown,
    /// 1: awaiting finalization
    Pending,
    /// 2: finalized, awaiting execution
    Finalized,
    /// 3: executed, awaiting sealing
    Executed,
    /// 4: result committed
    Sealed,
    /// 5
    Expired,
    /// Any value outside 0..=5
    Unrecognized(i64),
}

impl From<i64> for TransactionStatusCode {
    fn from(raw: i64) -> Self {
        match raw {
            0 => Self::Unknown,
            1 => Self::Pending,
            2 => Self::Finalized,
            3 => Self::Executed,
            4 => Self::Sealed,
            5 => Self::Expired,
            other => Self::Unrecognized(other),
        }
    }
}

impl From<TransactionStatusCode> for i64 {
    fn from(code: TransactionStatusCode) -> Self {
        match code {
            TransactionStatusCode::Unknown => 0,
            TransactionStatusCode::Pending => 1,
            TransactionStatusCode::Finalized => 2,
            TransactionStatusCode::Executed => 3,
            TransactionStatusCode::Sealed => 4,
            TransactionStatusCode::Expired => 5,
            TransactionStatusCode::Unrecognized(other) => other,
        }
    }
}

/// Outcome flags attached to a receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeFlags {
    pub is_executed: bool,
    pub is_successful: bool,
    pub is_failed: bool,
    /// Reserved; no status currently maps here.
    pub is_invalid: bool,
    pub is_pending: bool,
}

impl OutcomeFlags {
    /// Label used for metrics and logs.
    pub fn label(&self) -> &'static str {
        if self.is_successful {
            "successful"
        } else if self.is_failed {
            "failed"
        } else if self.is_executed {
            "executed"
        } else {
            "pending"
        }
    }
}

/// Decode a status and result code into outcome flags. Total over all inputs.
pub fn decode(status: TransactionStatusCode, result_code: i64) -> OutcomeFlags {
    let mut flags = OutcomeFlags::default();

    match status {
        TransactionStatusCode::Sealed if result_code == 0 => {
            flags.is_successful = true;
            flags.is_executed = true;
        }
        TransactionStatusCode::Sealed => {
            flags.is_failed = true;
        }
        TransactionStatusCode::Pending => {
            flags.is_pending = true;
        }
        TransactionStatusCode::Executed => {
            flags.is_executed = true;
        }
        TransactionStatusCode::Expired => {
            flags.is_failed = true;
        }
        // Unknown, Finalized and out-of-range codes all read as pending.
        TransactionStatusCode::Unknown
        | TransactionStatusCode::Finalized
        | TransactionStatusCode::Unrecognized(_) => {
            if let TransactionStatusCode::Unrecognized(raw) = status {
                tracing::warn!(status = raw, "Unrecognized transaction status, treating as pending");
            } else {
                tracing::debug!(?status, "Transaction not yet executed");
            }
            flags.is_pending = true;
        }
    }

    flags
}

/// Decode the status fields of a raw payload.
pub fn decode_payload(payload: &TransactionStatusPayload) -> OutcomeFlags {
    decode(payload.status.into(), payload.status_code)
}
