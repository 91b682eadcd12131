use anchor_lang::prelude::*;
use crate::state::{Config, PriceFeed, PriceTable};
use crate::utils::constants::{DEFAULT_MAX_PRICE_AGE, DEFAULT_MIN_HEALTH_FACTOR_BPS};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Config::DISCRIMINATOR.len() + Config::INIT_SPACE,
        seeds = [Config::SEED_PREFIX],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = authority,
        space = PriceFeed::DISCRIMINATOR.len() + PriceFeed::INIT_SPACE,
        seeds = [PriceFeed::SEED_PREFIX],
        bump
    )]
    pub price_feed: Account<'info, PriceFeed>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        self.config.set_inner(Config {
            authority: self.authority.key(),
            paused: false,
            min_health_factor_bps: DEFAULT_MIN_HEALTH_FACTOR_BPS,
            max_price_age: DEFAULT_MAX_PRICE_AGE,
            bump: bumps.config,
        });

        self.price_feed.set_inner(PriceFeed {
            authority: self.authority.key(),
            table: PriceTable::default(),
            published_at: Clock::get()?.unix_timestamp,
            bump: bumps.price_feed,
        });

        msg!("Protocol initialized, authority {}", self.authority.key());
        Ok(())
    }
}
