use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

use crate::error::ArcilendError;
use crate::{interest, oracle, LendingPool, Position};

#[derive(Accounts)]
pub struct Liquidate<'info> {
    #[account(mut)]
    pub liquidator: Signer<'info>,

    // Liquidation stays open while the pool is paused: undercollateralized
    // positions must not wait out a circuit breaker.
    #[account(mut, seeds = [b"pool", pool.authority.as_ref()], bump = pool.bump)]
    pub pool: Box<Account<'info, LendingPool>>,

    #[account(
        mut,
        seeds = [b"position", pool.key().as_ref(), position.owner.as_ref()],
        bump = position.bump,
        constraint = position.pool == pool.key() @ ArcilendError::PositionPoolMismatch,
        constraint = position.debt_amount > 0 @ ArcilendError::NoOutstandingDebt
    )]
    pub position: Box<Account<'info, Position>>,

    /// CHECK: Validated against the feed key registered in the pool; parsed
    /// and status-checked by the oracle module.
    #[account(constraint = oracle_feed.key() == pool.oracle_feed @ ArcilendError::InvalidOracleAccount)]
    pub oracle_feed: AccountInfo<'info>,

    #[account(constraint = collateral_mint.key() == pool.collateral_mint @ ArcilendError::InvalidCollateralMint)]
    pub collateral_mint: Box<Account<'info, Mint>>,

    #[account(constraint = debt_mint.key() == pool.debt_mint @ ArcilendError::InvalidDebtMint)]
    pub debt_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = pool
    )]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = debt_mint,
        associated_token::authority = pool
    )]
    pub liquidity_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = debt_mint,
        associated_token::authority = liquidator
    )]
    pub liquidator_debt_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = liquidator,
        associated_token::mint = collateral_mint,
        associated_token::authority = liquidator
    )]
    pub liquidator_collateral_ata: Box<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Liquidate<'info> {
    pub fn liquidate(&mut self, repay_amount: u64) -> Result<()> {
        require!(repay_amount > 0, ArcilendError::InvalidAmount);

        let now = Clock::get()?.unix_timestamp;

        let accrued = self
            .position
            .accrue_interest(self.pool.interest_rate_bps, now)?;
        self.pool.total_debt = self
            .pool
            .total_debt
            .checked_add(accrued)
            .ok_or(ArcilendError::MathOverflow)?;

        let price = oracle::read_price(&self.oracle_feed, now)?;
        let value = interest::collateral_value(self.position.collateral_amount, price)?;
        require!(
            interest::is_below_threshold(
                value,
                self.position.debt_amount,
                self.pool.liquidation_threshold_bps
            )?,
            ArcilendError::PositionHealthy
        );

        let max_repay = interest::max_liquidatable_debt(self.position.debt_amount)?;
        require!(repay_amount <= max_repay, ArcilendError::ExceedsCloseFactor);
        require!(
            self.liquidator_debt_ata.amount >= repay_amount,
            ArcilendError::InsufficientBalance
        );

        // Seizure is capped at the collateral on hand; the shortfall of a
        // deeply underwater position is borne by the liquidator's bonus.
        let seize = interest::seize_amount(repay_amount, price)?
            .min(self.position.collateral_amount);

        let repay_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.liquidator_debt_ata.to_account_info(),
                to: self.liquidity_vault.to_account_info(),
                authority: self.liquidator.to_account_info(),
            },
        );
        transfer(repay_ctx, repay_amount)?;

        let authority_key = self.pool.authority;
        let seeds = &[b"pool".as_ref(), authority_key.as_ref(), &[self.pool.bump]];
        let signer_seeds = &[&seeds[..]];

        let seize_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            Transfer {
                from: self.collateral_vault.to_account_info(),
                to: self.liquidator_collateral_ata.to_account_info(),
                authority: self.pool.to_account_info(),
            },
            signer_seeds,
        );
        transfer(seize_ctx, seize)?;

        self.position.debt_amount = self
            .position
            .debt_amount
            .checked_sub(repay_amount)
            .ok_or(ArcilendError::MathUnderflow)?;
        self.position.collateral_amount = self
            .position
            .collateral_amount
            .checked_sub(seize)
            .ok_or(ArcilendError::MathUnderflow)?;
        self.pool.total_debt = self
            .pool
            .total_debt
            .checked_sub(repay_amount)
            .ok_or(ArcilendError::MathUnderflow)?;
        self.pool.total_collateral = self
            .pool
            .total_collateral
            .checked_sub(seize)
            .ok_or(ArcilendError::MathUnderflow)?;

        msg!(
            "Liquidator {} repaid {} of {}'s debt and seized {} collateral",
            self.liquidator.key(),
            repay_amount,
            self.position.owner,
            seize
        );

        Ok(())
    }
}
