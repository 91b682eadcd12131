use anchor_lang::prelude::*;
use crate::state::{Config, HealthRecord, PriceFeed, UserPortfolio};
use crate::utils::summarize;

/// Read-only: anyone may ask for a portfolio's current health.
#[derive(Accounts)]
pub struct RefreshHealth<'info> {
    #[account(
        seeds = [Config::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [PriceFeed::SEED_PREFIX],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,

    #[account(
        seeds = [UserPortfolio::SEED_PREFIX, user_portfolio.owner.as_ref()],
        bump = user_portfolio.bump,
    )]
    pub user_portfolio: Account<'info, UserPortfolio>,
}

impl<'info> RefreshHealth<'info> {
    pub fn refresh(&self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let table = self.price_feed.fresh_table(now, self.config.max_price_age)?;
        let summary = summarize(&self.user_portfolio.portfolio, table)?;

        emit!(HealthRecord {
            ts: now,
            owner: self.user_portfolio.owner,
            supplied_value: summary.supplied_value,
            collateral_value: summary.collateral_value,
            debt_value: summary.debt_value,
            health_factor_bps: summary.health_factor.to_bps(),
            risk: summary.risk,
            yearly_earnings: summary.yearly_earnings,
            yearly_interest: summary.yearly_interest,
        });
        msg!(
            "Health factor {} ({:?}) for {}",
            summary.health_factor,
            summary.risk,
            self.user_portfolio.owner
        );

        Ok(())
    }
}
