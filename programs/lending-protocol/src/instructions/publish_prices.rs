use anchor_lang::prelude::*;
use crate::state::{Asset, Config, PriceFeed, PriceTable, PriceTableRecord};
use crate::errors::ProtocolError;

#[derive(Accounts)]
pub struct PublishPrices<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [Config::SEED_PREFIX],
        bump = config.bump,
        constraint = config.authority == authority.key() @ ProtocolError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [PriceFeed::SEED_PREFIX],
        bump = price_feed.bump,
        constraint = price_feed.authority == authority.key() @ ProtocolError::Unauthorized,
    )]
    pub price_feed: Account<'info, PriceFeed>,
}

impl<'info> PublishPrices<'info> {
    /// Replace the whole price table. Nothing is written if any entry is invalid.
    pub fn publish_prices(&mut self, assets: Vec<Asset>) -> Result<()> {
        let table = PriceTable::new(assets)?;
        let now = Clock::get()?.unix_timestamp;
        let asset_count = table.len() as u8;

        self.price_feed.replace(table, now);

        emit!(PriceTableRecord {
            ts: now,
            authority: self.authority.key(),
            asset_count,
        });
        msg!("Price table published: {} assets", asset_count);

        Ok(())
    }
}
