use anchor_lang::prelude::*;
use crate::state::UserPortfolio;
use crate::errors::ProtocolError;

#[derive(Accounts)]
pub struct ClosePortfolio<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Only an empty portfolio can be closed; rent goes back to the owner.
    #[account(
        mut,
        close = owner,
        seeds = [UserPortfolio::SEED_PREFIX, owner.key().as_ref()],
        bump = user_portfolio.bump,
        constraint = user_portfolio.owner == owner.key() @ ProtocolError::InvalidOwner,
        constraint = user_portfolio.portfolio.is_empty() @ ProtocolError::PortfolioNotEmpty,
    )]
    pub user_portfolio: Account<'info, UserPortfolio>,
}

impl<'info> ClosePortfolio<'info> {
    pub fn close(&mut self) -> Result<()> {
        msg!("Portfolio closed for {}", self.owner.key());
        Ok(())
    }
}
