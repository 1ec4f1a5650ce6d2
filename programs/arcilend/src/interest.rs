//! Pure accrual and health math shared by the borrow, withdraw, and
//! liquidation paths. All intermediates are widened to u128 and every
//! narrowing is checked.

use anchor_lang::prelude::*;

use crate::constants::{
    BPS_SCALE, LIQUIDATION_BONUS_BPS, LIQUIDATION_CLOSE_FACTOR_BPS, SECONDS_PER_YEAR,
};
use crate::error::ArcilendError;

/// Simple interest: `debt * rate_bps * elapsed / (BPS_SCALE * SECONDS_PER_YEAR)`,
/// truncating.
pub fn accrued_interest(debt: u64, interest_rate_bps: u16, elapsed_secs: u64) -> Result<u64> {
    if debt == 0 || interest_rate_bps == 0 || elapsed_secs == 0 {
        return Ok(0);
    }

    let numerator = (debt as u128)
        .checked_mul(interest_rate_bps as u128)
        .ok_or(ArcilendError::MathOverflow)?
        .checked_mul(elapsed_secs as u128)
        .ok_or(ArcilendError::MathOverflow)?;
    let denominator = (BPS_SCALE as u128)
        .checked_mul(SECONDS_PER_YEAR as u128)
        .ok_or(ArcilendError::MathOverflow)?;

    let interest = numerator
        .checked_div(denominator)
        .ok_or(ArcilendError::MathOverflow)?;

    u64::try_from(interest).map_err(|_| ArcilendError::MathOverflow.into())
}

/// Collateral value in normalized quote units.
pub fn collateral_value(collateral_amount: u64, price: u64) -> Result<u128> {
    let value = (collateral_amount as u128)
        .checked_mul(price as u128)
        .ok_or(ArcilendError::MathOverflow)?;
    Ok(value)
}

/// `collateral_value / debt >= ratio_bps / BPS_SCALE`, without division.
pub fn meets_ratio(collateral_value: u128, debt: u64, ratio_bps: u16) -> Result<bool> {
    if debt == 0 {
        return Ok(true);
    }
    let scaled_value = collateral_value
        .checked_mul(BPS_SCALE as u128)
        .ok_or(ArcilendError::MathOverflow)?;
    let required = (debt as u128)
        .checked_mul(ratio_bps as u128)
        .ok_or(ArcilendError::MathOverflow)?;
    Ok(scaled_value >= required)
}

/// True when the position has crossed below the liquidation threshold.
pub fn is_below_threshold(collateral_value: u128, debt: u64, threshold_bps: u16) -> Result<bool> {
    Ok(!meets_ratio(collateral_value, debt, threshold_bps)?)
}

/// Largest slice of debt a single liquidation may repay.
pub fn max_liquidatable_debt(debt: u64) -> Result<u64> {
    let max = (debt as u128)
        .checked_mul(LIQUIDATION_CLOSE_FACTOR_BPS as u128)
        .ok_or(ArcilendError::MathOverflow)?
        .checked_div(BPS_SCALE as u128)
        .ok_or(ArcilendError::MathOverflow)?;
    u64::try_from(max).map_err(|_| ArcilendError::MathOverflow.into())
}

/// Collateral units seized for a repayment: repaid value plus the liquidation
/// bonus, converted at the oracle price.
pub fn seize_amount(repay_amount: u64, price: u64) -> Result<u64> {
    let gross_value = (repay_amount as u128)
        .checked_mul((BPS_SCALE + LIQUIDATION_BONUS_BPS) as u128)
        .ok_or(ArcilendError::MathOverflow)?
        .checked_div(BPS_SCALE as u128)
        .ok_or(ArcilendError::MathOverflow)?;
    let units = gross_value
        .checked_div(price as u128)
        .ok_or(ArcilendError::InvalidPrice)?;
    u64::try_from(units).map_err(|_| ArcilendError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interest_over_one_year_at_five_percent() {
        // 1000 tokens (6 decimals) at 500 bps for a year
        let interest = accrued_interest(1_000_000_000, 500, SECONDS_PER_YEAR).unwrap();
        assert_eq!(interest, 50_000_000);
    }

    #[test]
    fn interest_over_one_day_truncates() {
        // 1000 tokens at 10% APR for one day: 1e9 * 1000 * 86400 / (1e4 * 31536000)
        let interest = accrued_interest(1_000_000_000, 1_000, 86_400).unwrap();
        assert_eq!(interest, 273_972);
    }

    #[test]
    fn interest_zero_cases() {
        assert_eq!(accrued_interest(0, 500, 86_400).unwrap(), 0);
        assert_eq!(accrued_interest(1_000_000, 0, 86_400).unwrap(), 0);
        assert_eq!(accrued_interest(1_000_000, 500, 0).unwrap(), 0);
    }

    #[test]
    fn interest_survives_large_debt() {
        // u64::MAX debt over a year must not overflow the u128 intermediates
        let interest = accrued_interest(u64::MAX, 5_000, SECONDS_PER_YEAR).unwrap();
        assert_eq!(interest, u64::MAX / 2);
    }

    #[test]
    fn ratio_check_boundaries() {
        // 150 collateral value against 100 debt at 150% is exactly at the ratio
        assert!(meets_ratio(150, 100, 15_000).unwrap());
        assert!(!meets_ratio(149, 100, 15_000).unwrap());
        // zero debt always passes
        assert!(meets_ratio(0, 0, 15_000).unwrap());
    }

    #[test]
    fn threshold_check_boundaries() {
        // liquidatable strictly below the threshold
        assert!(!is_below_threshold(120, 100, 12_000).unwrap());
        assert!(is_below_threshold(119, 100, 12_000).unwrap());
    }

    #[test]
    fn close_factor_is_half_the_debt() {
        assert_eq!(max_liquidatable_debt(1_000_000).unwrap(), 500_000);
        assert_eq!(max_liquidatable_debt(1).unwrap(), 0);
    }

    #[test]
    fn seizure_includes_bonus() {
        // repay 1_000_000 at price 2: (1_000_000 * 10500 / 10000) / 2 = 525_000
        assert_eq!(seize_amount(1_000_000, 2).unwrap(), 525_000);
    }

    #[test]
    fn seizure_rejects_zero_price() {
        assert!(seize_amount(1_000_000, 0).is_err());
    }
}
