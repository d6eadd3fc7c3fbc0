use crate::constants::PERCENT_PRECISION;
use crate::errors::MarketError;

/// `value * percent / 100`, truncating toward zero.
pub fn scale_by_percent(value: u128, percent: u128) -> Result<u128, MarketError> {
    scale_by_basis_points(value, percent, PERCENT_PRECISION)
}

/// `value * bps / precision`, truncating toward zero.
///
/// Required-collateral and fee computations depend on the truncation: a fee on a
/// small enough principal is zero, and required collateral rounds down.
pub fn scale_by_basis_points(value: u128, bps: u128, precision: u128) -> Result<u128, MarketError> {
    value
        .checked_mul(bps)
        .and_then(|scaled| scaled.checked_div(precision))
        .ok_or(MarketError::MathOverflow)
}
