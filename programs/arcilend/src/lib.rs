#![allow(deprecated)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod interest;
pub mod oracle;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("CfuTSUUVQnPrMjSLwSoERGaDrAojWBfZ4UhCWAUNxuff");

#[program]
pub mod arcilend {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        interest_rate_bps: u16,
        collateral_ratio_bps: u16,
        liquidation_threshold_bps: u16,
    ) -> Result<()> {
        ctx.accounts.initialize_pool(
            interest_rate_bps,
            collateral_ratio_bps,
            liquidation_threshold_bps,
            &ctx.bumps,
        )
    }

    pub fn deposit_collateral(ctx: Context<DepositCollateral>, amount: u64) -> Result<()> {
        ctx.accounts.deposit_collateral(amount, &ctx.bumps)
    }

    pub fn borrow(ctx: Context<Borrow>, amount: u64) -> Result<()> {
        ctx.accounts.borrow(amount)
    }

    pub fn repay(ctx: Context<Repay>, amount: u64) -> Result<()> {
        ctx.accounts.repay(amount)
    }

    pub fn withdraw_collateral(ctx: Context<WithdrawCollateral>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw_collateral(amount)
    }

    pub fn liquidate(ctx: Context<Liquidate>, repay_amount: u64) -> Result<()> {
        ctx.accounts.liquidate(repay_amount)
    }

    pub fn submit_risk_report(ctx: Context<SubmitRiskReport>, score_bps: u16) -> Result<()> {
        ctx.accounts.submit_risk_report(score_bps, &ctx.bumps)
    }

    pub fn set_pool_paused(ctx: Context<SetPoolPaused>, paused: bool) -> Result<()> {
        ctx.accounts.set_pool_paused(paused)
    }

    pub fn update_pool_params(
        ctx: Context<UpdatePoolParams>,
        interest_rate_bps: u16,
        collateral_ratio_bps: u16,
        liquidation_threshold_bps: u16,
    ) -> Result<()> {
        ctx.accounts.update_pool_params(
            interest_rate_bps,
            collateral_ratio_bps,
            liquidation_threshold_bps,
        )
    }
}
