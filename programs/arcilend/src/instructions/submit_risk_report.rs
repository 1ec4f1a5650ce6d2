use anchor_lang::prelude::*;

use crate::constants::MAX_RISK_SCORE_BPS;
use crate::error::ArcilendError;
use crate::{LendingPool, Position, RiskReport};

#[derive(Accounts)]
pub struct SubmitRiskReport<'info> {
    #[account(
        mut,
        constraint = mpc_node.key() == pool.mpc_node @ ArcilendError::UnauthorizedMpcNode
    )]
    pub mpc_node: Signer<'info>,

    #[account(seeds = [b"pool", pool.authority.as_ref()], bump = pool.bump)]
    pub pool: Box<Account<'info, LendingPool>>,

    #[account(
        seeds = [b"position", pool.key().as_ref(), position.owner.as_ref()],
        bump = position.bump,
        constraint = position.pool == pool.key() @ ArcilendError::PositionPoolMismatch
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(
        init_if_needed,
        payer = mpc_node,
        space = 8 + RiskReport::INIT_SPACE,
        seeds = [b"risk", position.key().as_ref()],
        bump
    )]
    pub risk_report: Box<Account<'info, RiskReport>>,

    pub system_program: Program<'info, System>,
}

impl<'info> SubmitRiskReport<'info> {
    pub fn submit_risk_report(
        &mut self,
        score_bps: u16,
        bumps: &SubmitRiskReportBumps,
    ) -> Result<()> {
        require!(
            score_bps <= MAX_RISK_SCORE_BPS,
            ArcilendError::InvalidRiskScore
        );

        let now = Clock::get()?.unix_timestamp;

        self.risk_report.set_inner(RiskReport {
            position: self.position.key(),
            score_bps,
            published_at: now,
            bump: bumps.risk_report,
        });

        msg!(
            "Risk report for position {}: score {} bps",
            self.position.key(),
            score_bps
        );

        Ok(())
    }
}
