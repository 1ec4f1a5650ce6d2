use anchor_lang::prelude::*;

use crate::error::ArcilendError;
use crate::LendingPool;

#[derive(Accounts)]
pub struct SetPoolPaused<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"pool", authority.key().as_ref()],
        bump = pool.bump,
        constraint = pool.authority == authority.key() @ ArcilendError::UnauthorizedAuthority
    )]
    pub pool: Account<'info, LendingPool>,
}

impl<'info> SetPoolPaused<'info> {
    pub fn set_pool_paused(&mut self, paused: bool) -> Result<()> {
        self.pool.paused = paused;
        msg!("Pool {} paused: {}", self.pool.key(), paused);
        Ok(())
    }
}
