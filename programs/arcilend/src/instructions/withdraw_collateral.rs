use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

use crate::error::ArcilendError;
use crate::{interest, oracle, LendingPool, Position};

#[derive(Accounts)]
pub struct WithdrawCollateral<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [b"pool", pool.authority.as_ref()],
        bump = pool.bump,
        constraint = !pool.paused @ ArcilendError::PoolPaused
    )]
    pub pool: Box<Account<'info, LendingPool>>,

    #[account(
        mut,
        seeds = [b"position", pool.key().as_ref(), user.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == user.key() @ ArcilendError::UnauthorizedUser,
        constraint = position.collateral_amount > 0 @ ArcilendError::NoCollateralDeposited
    )]
    pub position: Box<Account<'info, Position>>,

    /// CHECK: Validated against the feed key registered in the pool; parsed
    /// and status-checked by the oracle module.
    #[account(constraint = oracle_feed.key() == pool.oracle_feed @ ArcilendError::InvalidOracleAccount)]
    pub oracle_feed: AccountInfo<'info>,

    #[account(constraint = collateral_mint.key() == pool.collateral_mint @ ArcilendError::InvalidCollateralMint)]
    pub collateral_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = pool,
        constraint = collateral_vault.amount >= position.collateral_amount @ ArcilendError::InsufficientCollateral
    )]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = user
    )]
    pub user_collateral_ata: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> WithdrawCollateral<'info> {
    pub fn withdraw_collateral(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ArcilendError::InvalidAmount);
        require!(
            self.position.collateral_amount >= amount,
            ArcilendError::InsufficientCollateral
        );

        let now = Clock::get()?.unix_timestamp;

        let accrued = self
            .position
            .accrue_interest(self.pool.interest_rate_bps, now)?;
        self.pool.total_debt = self
            .pool
            .total_debt
            .checked_add(accrued)
            .ok_or(ArcilendError::MathOverflow)?;

        let remaining = self
            .position
            .collateral_amount
            .checked_sub(amount)
            .ok_or(ArcilendError::MathUnderflow)?;

        // With outstanding debt, the remainder must still satisfy the full
        // collateral ratio at the current price.
        if self.position.debt_amount > 0 {
            let price = oracle::read_price(&self.oracle_feed, now)?;
            let remaining_value = interest::collateral_value(remaining, price)?;
            require!(
                interest::meets_ratio(
                    remaining_value,
                    self.position.debt_amount,
                    self.pool.collateral_ratio_bps
                )?,
                ArcilendError::CollateralRatioViolated
            );
        }

        let authority_key = self.pool.authority;
        let seeds = &[b"pool".as_ref(), authority_key.as_ref(), &[self.pool.bump]];
        let signer_seeds = &[&seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            Transfer {
                from: self.collateral_vault.to_account_info(),
                to: self.user_collateral_ata.to_account_info(),
                authority: self.pool.to_account_info(),
            },
            signer_seeds,
        );
        transfer(cpi_ctx, amount)?;

        self.position.collateral_amount = remaining;
        self.pool.total_collateral = self
            .pool
            .total_collateral
            .checked_sub(amount)
            .ok_or(ArcilendError::MathUnderflow)?;

        msg!(
            "User {} withdrew {} collateral, remaining: {}",
            self.user.key(),
            amount,
            self.position.collateral_amount
        );

        Ok(())
    }
}
