use anchor_lang::prelude::*;
use crate::state::{Config, Portfolio, UserPortfolio};
use crate::errors::ProtocolError;

#[derive(Accounts)]
pub struct OpenPortfolio<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [Config::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = owner,
        space = UserPortfolio::DISCRIMINATOR.len() + UserPortfolio::INIT_SPACE,
        seeds = [UserPortfolio::SEED_PREFIX, owner.key().as_ref()],
        bump
    )]
    pub user_portfolio: Account<'info, UserPortfolio>,

    pub system_program: Program<'info, System>,
}

impl<'info> OpenPortfolio<'info> {
    pub fn open(&mut self, bumps: &OpenPortfolioBumps) -> Result<()> {
        require!(!self.config.is_paused(), ProtocolError::ProtocolPaused);

        self.user_portfolio.set_inner(UserPortfolio {
            owner: self.owner.key(),
            portfolio: Portfolio::new(),
            created_at: Clock::get()?.unix_timestamp,
            bump: bumps.user_portfolio,
        });

        Ok(())
    }
}
