use anchor_lang::prelude::*;
use crate::state::{Config, PositionAction, PositionRecord, PriceFeed, Reserve, UserPortfolio};
use crate::errors::ProtocolError;
use crate::utils::{health_factor, ledger, HealthFactor};

#[derive(Accounts)]
#[instruction(symbol: String)]
pub struct Supply<'info> {
    pub owner: Signer<'info>,

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
        mut,
        seeds = [Reserve::SEED_PREFIX, symbol.as_bytes()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, Reserve>,

    #[account(
        mut,
        seeds = [UserPortfolio::SEED_PREFIX, owner.key().as_ref()],
        bump = user_portfolio.bump,
        constraint = user_portfolio.owner == owner.key() @ ProtocolError::InvalidOwner,
    )]
    pub user_portfolio: Account<'info, UserPortfolio>,
}

impl<'info> Supply<'info> {
    pub fn supply(&mut self, symbol: String, amount: u64) -> Result<()> {
        require!(!self.config.is_paused(), ProtocolError::ProtocolPaused);

        // Supplying does not need fresh prices, only a listed asset
        let table = &self.price_feed.table;
        table.asset(&symbol)?;

        let next = ledger::supply(&self.user_portfolio.portfolio, &symbol, amount)?;
        self.reserve.record_supply(amount)?;

        let health_factor_bps = health_factor(&next, table).ok().map(HealthFactor::to_bps);
        self.user_portfolio.portfolio = next;

        let ts = Clock::get()?.unix_timestamp;
        emit!(PositionRecord {
            ts,
            owner: self.owner.key(),
            action: PositionAction::Supply,
            symbol: symbol.clone(),
            amount,
            health_factor_bps,
        });
        emit!(self.reserve.to_record(ts));
        msg!("Supplied {} {}", amount, symbol);

        Ok(())
    }
}
