use anchor_lang::prelude::*;
use crate::utils::constants::LIQUIDATION_HEALTH_FACTOR_BPS;

#[account]
#[derive(InitSpace)]
pub struct Config {
    pub authority: Pubkey,
    pub paused: bool,

    /// Health factor a borrow must leave behind (basis points, 12000 = 1.2)
    pub min_health_factor_bps: u64,

    /// Maximum price table age in seconds
    pub max_price_age: u64,

    pub bump: u8,
}

impl Config {
    pub const SEED_PREFIX: &'static [u8] = b"config";

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// A borrow floor below 1.0 would let borrows open liquidatable accounts.
    pub fn is_valid_min_health_factor(bps: u64) -> bool {
        bps >= LIQUIDATION_HEALTH_FACTOR_BPS
    }
}
