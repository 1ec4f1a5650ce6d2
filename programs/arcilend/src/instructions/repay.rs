use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

use crate::error::ArcilendError;
use crate::{LendingPool, Position};

#[derive(Accounts)]
pub struct Repay<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,

    // Repayment stays open while the pool is paused so debt can always be
    // unwound.
    #[account(mut, seeds = [b"pool", pool.authority.as_ref()], bump = pool.bump)]
    pub pool: Box<Account<'info, LendingPool>>,

    #[account(
        mut,
        seeds = [b"position", pool.key().as_ref(), borrower.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == borrower.key() @ ArcilendError::UnauthorizedUser,
        constraint = position.debt_amount > 0 @ ArcilendError::NoOutstandingDebt
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(constraint = debt_mint.key() == pool.debt_mint @ ArcilendError::InvalidDebtMint)]
    pub debt_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = debt_mint,
        associated_token::authority = pool
    )]
    pub liquidity_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = debt_mint,
        associated_token::authority = borrower
    )]
    pub borrower_debt_ata: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Repay<'info> {
    pub fn repay(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ArcilendError::InvalidAmount);

        let now = Clock::get()?.unix_timestamp;

        let accrued = self
            .position
            .accrue_interest(self.pool.interest_rate_bps, now)?;
        self.pool.total_debt = self
            .pool
            .total_debt
            .checked_add(accrued)
            .ok_or(ArcilendError::MathOverflow)?;

        // Overpayment is clamped to the outstanding debt.
        let repay_amount = amount.min(self.position.debt_amount);
        require!(
            self.borrower_debt_ata.amount >= repay_amount,
            ArcilendError::InsufficientBalance
        );

        let cpi_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.borrower_debt_ata.to_account_info(),
                to: self.liquidity_vault.to_account_info(),
                authority: self.borrower.to_account_info(),
            },
        );
        transfer(cpi_ctx, repay_amount)?;

        self.position.debt_amount = self
            .position
            .debt_amount
            .checked_sub(repay_amount)
            .ok_or(ArcilendError::MathUnderflow)?;
        self.pool.total_debt = self
            .pool
            .total_debt
            .checked_sub(repay_amount)
            .ok_or(ArcilendError::MathUnderflow)?;

        msg!(
            "User {} repaid {}, remaining debt: {}",
            self.borrower.key(),
            repay_amount,
            self.position.debt_amount
        );

        Ok(())
    }
}
