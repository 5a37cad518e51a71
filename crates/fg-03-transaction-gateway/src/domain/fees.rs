//! # Fees and Amounts
//!
//! Static fee schedule and UFix64 amount handling.
//!
//! UFix64 is an unsigned fixed-point number with 8 fractional digits and a
//! maximum of 184467440737.09551615.

use super::entities::FeeStats;
use super::errors::AmountError;
use rust_decimal::Decimal;
use shared_types::NetworkConfig;
use std::str::FromStr;

/// Fractional digits carried by a UFix64.
pub const UFIX64_SCALE: u32 = 8;

/// Flat per-transaction fee in units of 10^-8 FLOW.
const FLAT_FEE_UNITS: i64 = 300;

const UFIX64_MAX_UNITS: u64 = u64::MAX;

/// Fee schedule for `network`. Every tier is the flat inclusion fee.
pub fn fee_stats(network: &NetworkConfig) -> FeeStats {
    let fee = Decimal::new(FLAT_FEE_UNITS, UFIX64_SCALE);
    FeeStats {
        fee_crypto_currency: network.fee_currency.clone(),
        base_fee: fee,
        low_fee_charged: fee,
        standard_fee_charged: fee,
        fast_fee_charged: fee,
        max_fee_charged: fee,
    }
}

/// Parse a user-supplied amount into a UFix64 value.
///
/// Trailing zeros beyond 8 fractional digits are accepted; any other excess
/// precision is rejected rather than rounded.
pub fn normalize_amount(raw: &str) -> Result<Decimal, AmountError> {
    let trimmed = raw.trim();
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?
        .normalize();

    if amount <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }
    if amount.scale() > UFIX64_SCALE {
        return Err(AmountError::TooPrecise {
            scale: amount.scale(),
            max: UFIX64_SCALE,
        });
    }

    let mut scaled = amount;
    scaled.rescale(UFIX64_SCALE);
    if scaled.mantissa() > i128::from(UFIX64_MAX_UNITS) {
        return Err(AmountError::OutOfRange);
    }

    Ok(scaled)
}

/// Render a UFix64 value with exactly 8 fractional digits.
pub fn format_ufix64(amount: Decimal) -> String {
    let mut scaled = amount;
    scaled.rescale(UFIX64_SCALE);
    scaled.to_string()
}
