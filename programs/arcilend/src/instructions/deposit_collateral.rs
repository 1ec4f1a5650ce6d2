use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

use crate::error::ArcilendError;
use crate::{LendingPool, Position};

#[derive(Accounts)]
pub struct DepositCollateral<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [b"pool", pool.authority.as_ref()],
        bump = pool.bump,
        constraint = !pool.paused @ ArcilendError::PoolPaused
    )]
    pub pool: Box<Account<'info, LendingPool>>,

    #[account(constraint = collateral_mint.key() == pool.collateral_mint @ ArcilendError::InvalidCollateralMint)]
    pub collateral_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = user
    )]
    pub user_collateral_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = pool
    )]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + Position::INIT_SPACE,
        seeds = [b"position", pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub position: Box<Account<'info, Position>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> DepositCollateral<'info> {
    pub fn deposit_collateral(
        &mut self,
        amount: u64,
        bumps: &DepositCollateralBumps,
    ) -> Result<()> {
        require!(amount > 0, ArcilendError::InvalidAmount);
        require!(
            self.user_collateral_ata.amount >= amount,
            ArcilendError::InsufficientBalance
        );

        let now = Clock::get()?.unix_timestamp;

        if self.position.owner.eq(&Pubkey::default()) {
            self.position.set_inner(Position {
                owner: self.user.key(),
                pool: self.pool.key(),
                collateral_amount: 0,
                debt_amount: 0,
                last_accrual_ts: now,
                bump: bumps.position,
            });
        }

        let cpi_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.user_collateral_ata.to_account_info(),
                to: self.collateral_vault.to_account_info(),
                authority: self.user.to_account_info(),
            },
        );
        transfer(cpi_ctx, amount)?;

        self.position.collateral_amount = self
            .position
            .collateral_amount
            .checked_add(amount)
            .ok_or(ArcilendError::MathOverflow)?;
        self.pool.total_collateral = self
            .pool
            .total_collateral
            .checked_add(amount)
            .ok_or(ArcilendError::MathOverflow)?;

        msg!(
            "User {} deposited {} collateral, position total: {}",
            self.user.key(),
            amount,
            self.position.collateral_amount
        );

        Ok(())
    }
}
