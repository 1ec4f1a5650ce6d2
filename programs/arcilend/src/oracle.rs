//! Pyth price consumption for the pool's collateral feed.

use anchor_lang::prelude::*;
use pyth_sdk_solana::{
    state::{load_price_account, GenericPriceAccount, PriceStatus},
    Price,
};

use crate::constants::MAX_PRICE_AGE_SECS;
use crate::error::ArcilendError;

/// Loads the feed, checks status, positivity, and staleness, and returns the
/// price normalized to whole quote units.
pub fn read_price(oracle_feed: &AccountInfo, now: i64) -> Result<u64> {
    require!(
        !oracle_feed.data_is_empty(),
        ArcilendError::EmptyOracleAccount
    );
    let data = oracle_feed
        .try_borrow_data()
        .map_err(|_| ArcilendError::FailedToBorrowOracleData)?;

    let price_account: &GenericPriceAccount<32, Price> =
        load_price_account(&data).map_err(|_| ArcilendError::InvalidPythAccount)?;

    require!(
        price_account.agg.status == PriceStatus::Trading,
        ArcilendError::InvalidPriceStatus
    );

    let current_price = price_account.agg.price;
    require!(current_price > 0, ArcilendError::InvalidPrice);

    require!(
        now.saturating_sub(price_account.timestamp) < MAX_PRICE_AGE_SECS,
        ArcilendError::StalePrice
    );

    let normalized = normalize_price(current_price, price_account.expo)?;
    Ok(normalized as u64)
}

/// Applies the feed exponent. Guaranteed nonnegative for positive input.
pub fn normalize_price(price: i64, expo: i32) -> Result<i64> {
    let normalized = if expo < 0 {
        let scale = 10_i64
            .checked_pow(expo.unsigned_abs())
            .ok_or(ArcilendError::MathOverflow)?;
        price
            .checked_div(scale)
            .ok_or(ArcilendError::MathOverflow)?
    } else {
        let scale = 10_i64
            .checked_pow(expo as u32)
            .ok_or(ArcilendError::MathOverflow)?;
        price
            .checked_mul(scale)
            .ok_or(ArcilendError::MathOverflow)?
    };
    require!(normalized > 0, ArcilendError::InvalidPrice);
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_exponent_divides() {
        // pyth SOL/USD style: price 153_25000000, expo -8
        assert_eq!(normalize_price(15_325_000_000, -8).unwrap(), 153);
    }

    #[test]
    fn positive_exponent_multiplies() {
        assert_eq!(normalize_price(50, 2).unwrap(), 5_000);
    }

    #[test]
    fn zero_exponent_is_identity() {
        assert_eq!(normalize_price(42, 0).unwrap(), 42);
    }

    #[test]
    fn sub_unit_price_is_rejected() {
        // a price that truncates to zero must not be treated as free collateral
        assert!(normalize_price(99, -8).is_err());
    }

    #[test]
    fn extreme_exponent_overflows() {
        assert!(normalize_price(2, 19).is_err());
        assert!(normalize_price(i64::MAX, 1).is_err());
    }
}
