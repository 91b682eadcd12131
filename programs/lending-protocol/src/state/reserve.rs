use anchor_lang::prelude::*;
use crate::errors::{ProtocolError, ProtocolResult};
use crate::state::ReserveRecord;
use crate::utils::constants::BPS_DENOMINATOR;

/// Market-wide supply and borrow totals for one asset
#[account]
#[derive(InitSpace)]
pub struct Reserve {
    #[max_len(10)]
    pub symbol: String,

    /// Total supplied across all portfolios (base units)
    pub total_supplied: u64,

    /// Total borrowed across all portfolios (base units)
    pub total_borrowed: u64,

    pub bump: u8,
}

impl Reserve {
    pub const SEED_PREFIX: &'static [u8] = b"reserve";

    /// Get available liquidity to borrow or withdraw
    pub fn available_liquidity(&self) -> u64 {
        self.total_supplied.saturating_sub(self.total_borrowed)
    }

    pub fn can_borrow(&self, amount: u64) -> bool {
        self.available_liquidity() >= amount
    }

    /// Share of supplied liquidity currently lent out (basis points)
    pub fn utilization_bps(&self) -> u64 {
        if self.total_supplied == 0 {
            return 0;
        }

        let utilization = self.total_borrowed as u128 * BPS_DENOMINATOR as u128
            / self.total_supplied as u128;
        utilization.min(BPS_DENOMINATOR as u128) as u64
    }

    /// Totals and utilization as of `ts`, for the event log
    pub fn to_record(&self, ts: i64) -> ReserveRecord {
        ReserveRecord {
            ts,
            symbol: self.symbol.clone(),
            total_supplied: self.total_supplied,
            total_borrowed: self.total_borrowed,
            utilization_bps: self.utilization_bps(),
        }
    }

    pub fn record_supply(&mut self, amount: u64) -> ProtocolResult {
        self.total_supplied = self.total_supplied
            .checked_add(amount)
            .ok_or(ProtocolError::MathOverflow)?;
        Ok(())
    }

    pub fn record_withdraw(&mut self, amount: u64) -> ProtocolResult {
        if !self.can_borrow(amount) {
            return Err(ProtocolError::InsufficientLiquidity);
        }
        self.total_supplied = self.total_supplied
            .checked_sub(amount)
            .ok_or(ProtocolError::MathUnderflow)?;
        Ok(())
    }

    pub fn record_borrow(&mut self, amount: u64) -> ProtocolResult {
        if !self.can_borrow(amount) {
            return Err(ProtocolError::InsufficientLiquidity);
        }
        self.total_borrowed = self.total_borrowed
            .checked_add(amount)
            .ok_or(ProtocolError::MathOverflow)?;
        Ok(())
    }

    /// Record debt repayment
    pub fn record_repay(&mut self, amount: u64) -> ProtocolResult {
        self.total_borrowed = self.total_borrowed
            .checked_sub(amount)
            .ok_or(ProtocolError::MathUnderflow)?;
        Ok(())
    }
}
