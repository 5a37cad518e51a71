//! # Event Extraction
//!
//! Pulls fee, sender, amount and receiver out of the events of one
//! transaction.
//!
//! The fee deduction is also a withdrawal from the payer's vault. The sender
//! is therefore the account whose withdrawal matches the fee, and the
//! transfer is the first withdrawal or deposit that does not. A transfer
//! whose amount equals the fee is indistinguishable from the fee itself and
//! is reported as unavailable.

use rust_decimal::Decimal;
use shared_types::{EventIdentifiers, LedgerEvent};
use std::str::FromStr;

const AMOUNT_FIELD: &str = "amount";
const FROM_FIELD: &str = "from";
const TO_FIELD: &str = "to";

/// Read-only view over a transaction's events.
///
/// Every lookup scans in input order and returns the first match. Lookups
/// never fail; absence is `None`.
#[derive(Debug, Clone, Copy)]
pub struct EventExtractor<'a> {
    events: &'a [LedgerEvent],
    identifiers: &'a EventIdentifiers,
}

impl<'a> EventExtractor<'a> {
    pub fn new(events: &'a [LedgerEvent], identifiers: &'a EventIdentifiers) -> Self {
        Self {
            events,
            identifiers,
        }
    }

    /// Fee charged for the transaction.
    ///
    /// Only the first fee event counts; an unreadable amount there means the
    /// fee is unknown.
    pub fn gas_cost(&self) -> Option<Decimal> {
        self.of_type(&self.identifiers.fee_deducted)
            .next()
            .and_then(event_amount)
    }

    /// Account that paid the fee.
    ///
    /// `None` whenever the fee is unknown.
    pub fn sender_address(&self) -> Option<String> {
        let gas = self.gas_cost()?;
        self.of_type(&self.identifiers.tokens_withdrawn)
            .find(|event| event_amount(event) == Some(gas))
            .and_then(|event| event.data_str(FROM_FIELD))
            .map(str::to_string)
    }

    /// Amount moved by the transfer.
    pub fn transfer_amount(&self) -> Option<Decimal> {
        let gas = self.gas_cost();
        self.of_type(&self.identifiers.tokens_withdrawn)
            .filter_map(event_amount)
            .find(|amount| Some(*amount) != gas)
    }

    /// Account that received the transfer.
    pub fn receiver_address(&self) -> Option<String> {
        let gas = self.gas_cost();
        self.of_type(&self.identifiers.tokens_deposited)
            .find(|event| matches!(event_amount(event), Some(amount) if Some(amount) != gas))
            .and_then(|event| event.data_str(TO_FIELD))
            .map(str::to_string)
    }

    fn of_type<'s>(&'s self, identifier: &'s str) -> impl Iterator<Item = &'a LedgerEvent> + 's {
        self.events
            .iter()
            .filter(move |event| event.event_type.contains(identifier))
    }
}

/// `amount` as a decimal. Accepts JSON strings and numbers.
fn event_amount(event: &LedgerEvent) -> Option<Decimal> {
    match event.data.get(AMOUNT_FIELD)? {
        serde_json::Value::String(s) => parse_decimal(s.trim()),
        // serde_json renders small floats in exponent form
        serde_json::Value::Number(n) => parse_decimal(&n.to_string()),
        _ => None,
    }
}

/// Plain decimal or exponent notation only: `[+-]digits[.digits][e[+-]digits]`.
fn parse_decimal(s: &str) -> Option<Decimal> {
    let (mantissa, exponent) = match s.find(&['e', 'E'][..]) {
        Some(at) => (&s[..at], Some(&s[at + 1..])),
        None => (s, None),
    };
    if !is_plain_decimal(mantissa) {
        return None;
    }
    match exponent {
        None => Decimal::from_str(mantissa).ok(),
        Some(exp) => {
            let digits = exp.strip_prefix(&['+', '-'][..]).unwrap_or(exp);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Decimal::from_scientific(s).ok()
        }
    }
}

fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    (!whole.is_empty() || !fraction.is_empty()) && digits(whole) && digits(fraction)
}
