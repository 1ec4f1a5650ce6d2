use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::error::ArcilendError;
use crate::{LendingPool, ProtocolConfig};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut, seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + LendingPool::INIT_SPACE,
        seeds = [b"pool", authority.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, LendingPool>>,

    /// CHECK: Identity of the confidential-compute node; stored and later
    /// required as the signer of risk reports, never read as data.
    pub mpc_node: UncheckedAccount<'info>,

    /// CHECK: Pyth price account for the collateral asset; stored and
    /// validated on every price read.
    pub oracle_feed: UncheckedAccount<'info>,

    pub collateral_mint: Box<Account<'info, Mint>>,

    pub debt_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = collateral_mint,
        associated_token::authority = pool
    )]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = debt_mint,
        associated_token::authority = pool
    )]
    pub liquidity_vault: Box<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(
        &mut self,
        interest_rate_bps: u16,
        collateral_ratio_bps: u16,
        liquidation_threshold_bps: u16,
        bumps: &InitializePoolBumps,
    ) -> Result<()> {
        LendingPool::validate_params(
            interest_rate_bps,
            collateral_ratio_bps,
            liquidation_threshold_bps,
        )?;

        require!(
            !self.mpc_node.key().eq(&Pubkey::default()),
            ArcilendError::InvalidMpcNode
        );
        require!(
            !self.oracle_feed.key().eq(&Pubkey::default()),
            ArcilendError::InvalidOracleAccount
        );
        require!(
            self.collateral_mint.key() != self.debt_mint.key(),
            ArcilendError::InvalidDebtMint
        );

        self.pool.set_inner(LendingPool {
            authority: self.authority.key(),
            mpc_node: self.mpc_node.key(),
            oracle_feed: self.oracle_feed.key(),
            collateral_mint: self.collateral_mint.key(),
            debt_mint: self.debt_mint.key(),
            interest_rate_bps,
            collateral_ratio_bps,
            liquidation_threshold_bps,
            total_collateral: 0,
            total_debt: 0,
            paused: false,
            bump: bumps.pool,
        });

        self.config.pool_count = self
            .config
            .pool_count
            .checked_add(1)
            .ok_or(ArcilendError::MathOverflow)?;

        msg!(
            "Pool initialized by {}: rate {} bps, collateral ratio {} bps, liquidation threshold {} bps",
            self.authority.key(),
            interest_rate_bps,
            collateral_ratio_bps,
            liquidation_threshold_bps
        );

        Ok(())
    }
}
