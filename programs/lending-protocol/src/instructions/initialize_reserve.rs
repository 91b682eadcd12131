use anchor_lang::prelude::*;
use crate::state::{Config, PriceFeed, Reserve};
use crate::errors::ProtocolError;

#[derive(Accounts)]
#[instruction(symbol: String)]
pub struct InitializeReserve<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED_PREFIX],
        bump = config.bump,
        constraint = config.authority == authority.key() @ ProtocolError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [PriceFeed::SEED_PREFIX],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,

    #[account(
        init,
        payer = authority,
        space = Reserve::DISCRIMINATOR.len() + Reserve::INIT_SPACE,
        seeds = [Reserve::SEED_PREFIX, symbol.as_bytes()],
        bump
    )]
    pub reserve: Account<'info, Reserve>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeReserve<'info> {
    pub fn initialize_reserve(
        &mut self,
        bumps: &InitializeReserveBumps,
        symbol: String,
    ) -> Result<()> {
        // Only listed assets get a reserve
        self.price_feed.table.asset(&symbol)?;

        msg!("Reserve opened for {}", symbol);
        self.reserve.set_inner(Reserve {
            symbol,
            total_supplied: 0,
            total_borrowed: 0,
            bump: bumps.reserve,
        });

        Ok(())
    }
}
