use anchor_lang::prelude::*;
use crate::state::Config;
use crate::errors::ProtocolError;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED_PREFIX],
        bump = config.bump,
        constraint = config.authority == authority.key() @ ProtocolError::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    pub fn update_pause_state(&mut self, paused: bool) -> Result<()> {
        self.config.paused = paused;
        msg!("Protocol paused: {}", paused);
        Ok(())
    }

    pub fn update_min_health_factor(&mut self, min_health_factor_bps: u64) -> Result<()> {
        require!(
            Config::is_valid_min_health_factor(min_health_factor_bps),
            ProtocolError::InvalidHealthFactorThreshold
        );
        self.config.min_health_factor_bps = min_health_factor_bps;
        Ok(())
    }

    pub fn update_max_price_age(&mut self, max_price_age: u64) -> Result<()> {
        self.config.max_price_age = max_price_age;
        Ok(())
    }
}
