#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;
pub mod utils;
pub mod session;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::Asset;

declare_id!("31Y34Ee2aoismj5FEz8dn8rcBA8Yyi7tDfasUZvgUz1R");

#[program]
pub mod lending_protocol {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    /// Replace the whole price table in one tick
    pub fn publish_prices(ctx: Context<PublishPrices>, assets: Vec<Asset>) -> Result<()> {
        ctx.accounts.publish_prices(assets)
    }

    pub fn initialize_reserve(ctx: Context<InitializeReserve>, symbol: String) -> Result<()> {
        ctx.accounts.initialize_reserve(&ctx.bumps, symbol)
    }

    pub fn open_portfolio(ctx: Context<OpenPortfolio>) -> Result<()> {
        ctx.accounts.open(&ctx.bumps)
    }

    pub fn supply(ctx: Context<Supply>, symbol: String, amount: u64) -> Result<()> {
        ctx.accounts.supply(symbol, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, symbol: String, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(symbol, amount)
    }

    pub fn borrow(ctx: Context<Borrow>, symbol: String, amount: u64) -> Result<()> {
        ctx.accounts.borrow(symbol, amount)
    }

    pub fn repay(ctx: Context<Repay>, symbol: String, amount: u64) -> Result<()> {
        ctx.accounts.repay(symbol, amount)
    }

    pub fn refresh_health(ctx: Context<RefreshHealth>) -> Result<()> {
        ctx.accounts.refresh()
    }

    pub fn close_portfolio(ctx: Context<ClosePortfolio>) -> Result<()> {
        ctx.accounts.close()
    }

    pub fn update_pause_state(ctx: Context<UpdateConfig>, paused: bool) -> Result<()> {
        ctx.accounts.update_pause_state(paused)
    }

    pub fn update_min_health_factor(
        ctx: Context<UpdateConfig>,
        min_health_factor_bps: u64,
    ) -> Result<()> {
        ctx.accounts.update_min_health_factor(min_health_factor_bps)
    }

    pub fn update_max_price_age(ctx: Context<UpdateConfig>, max_price_age: u64) -> Result<()> {
        ctx.accounts.update_max_price_age(max_price_age)
    }
}
