use anchor_lang::prelude::*;

use crate::ProtocolConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(init, payer = admin, space = 8 + ProtocolConfig::INIT_SPACE, seeds = [b"config"], bump)]
    pub config: Account<'info, ProtocolConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.config.set_inner(ProtocolConfig {
            admin: self.admin.key(),
            pool_count: 0,
            bump: bumps.config,
        });
        msg!("Protocol initialized by admin: {}", self.admin.key());
        Ok(())
    }
}
