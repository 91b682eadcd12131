use anchor_lang::prelude::*;
use crate::state::{PositionAction, PositionRecord, PriceFeed, Reserve, UserPortfolio};
use crate::errors::ProtocolError;
use crate::utils::{health_factor, ledger, HealthFactor};

#[derive(Accounts)]
#[instruction(symbol: String)]
pub struct Repay<'info> {
    pub owner: Signer<'info>,

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

impl<'info> Repay<'info> {
    /// Repayment is allowed while paused so borrowers can always reduce risk.
    pub fn repay(&mut self, symbol: String, amount: u64) -> Result<()> {
        let portfolio = &self.user_portfolio.portfolio;
        let next = ledger::repay(portfolio, &symbol, amount)?;

        let repaid = portfolio.debt_amount(&symbol)
            .checked_sub(next.debt_amount(&symbol))
            .ok_or(ProtocolError::MathUnderflow)?;
        if repaid == 0 {
            msg!("No outstanding {} debt to repay", symbol);
            return Ok(());
        }

        self.reserve.record_repay(repaid)?;

        let health_factor_bps = health_factor(&next, &self.price_feed.table)
            .ok()
            .map(HealthFactor::to_bps);
        self.user_portfolio.portfolio = next;

        let ts = Clock::get()?.unix_timestamp;
        emit!(PositionRecord {
            ts,
            owner: self.owner.key(),
            action: PositionAction::Repay,
            symbol: symbol.clone(),
            amount: repaid,
            health_factor_bps,
        });
        emit!(self.reserve.to_record(ts));
        msg!("Repaid {} {}", repaid, symbol);

        Ok(())
    }
}
