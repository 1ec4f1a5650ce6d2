use anchor_lang::prelude::*;

use crate::constants::{MAX_INTEREST_RATE_BPS, MIN_COLLATERAL_RATIO_BPS};
use crate::error::ArcilendError;

#[account]
#[derive(InitSpace)]
pub struct LendingPool {
    pub authority: Pubkey,
    /// Confidential-compute node allowed to post risk reports for this pool.
    pub mpc_node: Pubkey,
    /// Pyth price account for the collateral asset.
    pub oracle_feed: Pubkey,
    pub collateral_mint: Pubkey,
    pub debt_mint: Pubkey,
    pub interest_rate_bps: u16, // e.g. 500 = 5.00% APR
    pub collateral_ratio_bps: u16, // e.g. 15000 = 150.00%
    pub liquidation_threshold_bps: u16,
    pub total_collateral: u64,
    pub total_debt: u64,
    pub paused: bool,
    pub bump: u8,
}

impl LendingPool {
    pub fn validate_params(
        interest_rate_bps: u16,
        collateral_ratio_bps: u16,
        liquidation_threshold_bps: u16,
    ) -> Result<()> {
        require!(
            interest_rate_bps > 0 && interest_rate_bps <= MAX_INTEREST_RATE_BPS,
            ArcilendError::InvalidInterestRate
        );
        require!(
            collateral_ratio_bps >= MIN_COLLATERAL_RATIO_BPS,
            ArcilendError::InvalidCollateralRatio
        );
        require!(
            liquidation_threshold_bps > 0 && liquidation_threshold_bps < collateral_ratio_bps,
            ArcilendError::InvalidLiquidationThreshold
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sane_params() {
        assert!(LendingPool::validate_params(500, 15_000, 12_000).is_ok());
        assert!(LendingPool::validate_params(1, 10_000, 9_999).is_ok());
        assert!(LendingPool::validate_params(5_000, 20_000, 1).is_ok());
    }

    #[test]
    fn rejects_zero_or_excessive_interest_rate() {
        assert!(LendingPool::validate_params(0, 15_000, 12_000).is_err());
        assert!(LendingPool::validate_params(5_001, 15_000, 12_000).is_err());
    }

    #[test]
    fn rejects_undercollateralized_ratio() {
        assert!(LendingPool::validate_params(500, 9_999, 9_000).is_err());
    }

    #[test]
    fn rejects_threshold_at_or_above_ratio() {
        assert!(LendingPool::validate_params(500, 15_000, 15_000).is_err());
        assert!(LendingPool::validate_params(500, 15_000, 16_000).is_err());
        assert!(LendingPool::validate_params(500, 15_000, 0).is_err());
    }
}
