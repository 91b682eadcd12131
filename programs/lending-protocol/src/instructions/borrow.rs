use anchor_lang::prelude::*;
use crate::state::{Config, PositionAction, PositionRecord, PriceFeed, Reserve, UserPortfolio};
use crate::errors::ProtocolError;
use crate::utils::{health_factor, ledger};

#[derive(Accounts)]
#[instruction(symbol: String)]
pub struct Borrow<'info> {
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

impl<'info> Borrow<'info> {
    pub fn borrow(&mut self, symbol: String, amount: u64) -> Result<()> {
        require!(!self.config.is_paused(), ProtocolError::ProtocolPaused);

        let now = Clock::get()?.unix_timestamp;
        let table = self.price_feed.fresh_table(now, self.config.max_price_age)?;

        require!(
            self.reserve.can_borrow(amount),
            ProtocolError::InsufficientLiquidity
        );

        let next = ledger::borrow(
            &self.user_portfolio.portfolio,
            &symbol,
            amount,
            table,
            self.config.min_health_factor_bps,
        )
        .map_err(|err| {
            msg!("Borrow of {} {} rejected: {}", amount, symbol, err);
            err
        })?;
        self.reserve.record_borrow(amount)?;

        let health_factor = health_factor(&next, table)?;
        self.user_portfolio.portfolio = next;

        emit!(PositionRecord {
            ts: now,
            owner: self.owner.key(),
            action: PositionAction::Borrow,
            symbol: symbol.clone(),
            amount,
            health_factor_bps: Some(health_factor.to_bps()),
        });
        emit!(self.reserve.to_record(now));
        msg!("Borrowed {} {}, health factor {}", amount, symbol, health_factor);

        Ok(())
    }
}
