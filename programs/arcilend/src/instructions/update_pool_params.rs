use anchor_lang::prelude::*;

use crate::error::ArcilendError;
use crate::LendingPool;

#[derive(Accounts)]
pub struct UpdatePoolParams<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"pool", authority.key().as_ref()],
        bump = pool.bump,
        constraint = pool.authority == authority.key() @ ArcilendError::UnauthorizedAuthority
    )]
    pub pool: Account<'info, LendingPool>,
}

impl<'info> UpdatePoolParams<'info> {
    pub fn update_pool_params(
        &mut self,
        interest_rate_bps: u16,
        collateral_ratio_bps: u16,
        liquidation_threshold_bps: u16,
    ) -> Result<()> {
        LendingPool::validate_params(
            interest_rate_bps,
            collateral_ratio_bps,
            liquidation_threshold_bps,
        )?;

        self.pool.interest_rate_bps = interest_rate_bps;
        self.pool.collateral_ratio_bps = collateral_ratio_bps;
        self.pool.liquidation_threshold_bps = liquidation_threshold_bps;

        msg!(
            "Pool {} params updated: rate {} bps, collateral ratio {} bps, liquidation threshold {} bps",
            self.pool.key(),
            interest_rate_bps,
            collateral_ratio_bps,
            liquidation_threshold_bps
        );

        Ok(())
    }
}
