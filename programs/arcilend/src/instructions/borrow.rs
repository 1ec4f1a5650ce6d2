use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

use crate::error::ArcilendError;
use crate::{interest, oracle, LendingPool, Position, RiskReport};

#[derive(Accounts)]
pub struct Borrow<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,

    #[account(
        mut,
        seeds = [b"pool", pool.authority.as_ref()],
        bump = pool.bump,
        constraint = !pool.paused @ ArcilendError::PoolPaused
    )]
    pub pool: Box<Account<'info, LendingPool>>,

    #[account(
        mut,
        seeds = [b"position", pool.key().as_ref(), borrower.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == borrower.key() @ ArcilendError::UnauthorizedUser,
        constraint = position.collateral_amount > 0 @ ArcilendError::NoCollateralDeposited
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(
        seeds = [b"risk", position.key().as_ref()],
        bump = risk_report.bump,
        constraint = risk_report.position == position.key() @ ArcilendError::RiskReportMismatch
    )]
    pub risk_report: Box<Account<'info, RiskReport>>,

    /// CHECK: Validated against the feed key registered in the pool; parsed
    /// and status-checked by the oracle module.
    #[account(constraint = oracle_feed.key() == pool.oracle_feed @ ArcilendError::InvalidOracleAccount)]
    pub oracle_feed: AccountInfo<'info>,

    #[account(constraint = debt_mint.key() == pool.debt_mint @ ArcilendError::InvalidDebtMint)]
    pub debt_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = debt_mint,
        associated_token::authority = pool
    )]
    pub liquidity_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = borrower,
        associated_token::mint = debt_mint,
        associated_token::authority = borrower
    )]
    pub borrower_debt_ata: Box<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Borrow<'info> {
    pub fn borrow(&mut self, amount: u64) -> Result<()> {
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

        require!(self.risk_report.is_fresh(now), ArcilendError::StaleRiskReport);
        require!(self.risk_report.is_passing(), ArcilendError::RiskScoreTooLow);

        let price = oracle::read_price(&self.oracle_feed, now)?;
        let value = interest::collateral_value(self.position.collateral_amount, price)?;

        let new_debt = self
            .position
            .debt_amount
            .checked_add(amount)
            .ok_or(ArcilendError::MathOverflow)?;
        require!(
            interest::meets_ratio(value, new_debt, self.pool.collateral_ratio_bps)?,
            ArcilendError::CollateralRatioViolated
        );

        require!(
            self.liquidity_vault.amount >= amount,
            ArcilendError::InsufficientLiquidity
        );

        let authority_key = self.pool.authority;
        let seeds = &[b"pool".as_ref(), authority_key.as_ref(), &[self.pool.bump]];
        let signer_seeds = &[&seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            Transfer {
                from: self.liquidity_vault.to_account_info(),
                to: self.borrower_debt_ata.to_account_info(),
                authority: self.pool.to_account_info(),
            },
            signer_seeds,
        );
        transfer(cpi_ctx, amount)?;

        self.position.debt_amount = new_debt;
        self.pool.total_debt = self
            .pool
            .total_debt
            .checked_add(amount)
            .ok_or(ArcilendError::MathOverflow)?;

        msg!(
            "User {} borrowed {}, position debt: {}, risk score: {} bps",
            self.borrower.key(),
            amount,
            self.position.debt_amount,
            self.risk_report.score_bps
        );

        Ok(())
    }
}
