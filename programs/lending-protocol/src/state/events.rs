use anchor_lang::prelude::*;
use crate::utils::health::RiskLevel;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionAction {
    Supply,
    Withdraw,
    Borrow,
    Repay,
}

#[event]
pub struct PositionRecord {
    /// unix_timestamp of action
    pub ts: i64,
    pub owner: Pubkey,
    pub action: PositionAction,
    pub symbol: String,
    /// base units actually moved (repay is clamped to the outstanding debt)
    pub amount: u64,
    /// precision: BPS, u64::MAX when the portfolio carries no debt.
    /// None when the current table cannot price the portfolio.
    pub health_factor_bps: Option<u64>,
}

#[event]
pub struct PriceTableRecord {
    pub ts: i64,
    pub authority: Pubkey,
    pub asset_count: u8,
}

#[event]
pub struct HealthRecord {
    pub ts: i64,
    pub owner: Pubkey,
    /// precision: PRICE_PRECISION
    pub supplied_value: u64,
    /// precision: PRICE_PRECISION
    pub collateral_value: u64,
    /// precision: PRICE_PRECISION
    pub debt_value: u64,
    /// precision: BPS, u64::MAX when the portfolio carries no debt
    pub health_factor_bps: u64,
    pub risk: RiskLevel,
    /// precision: PRICE_PRECISION
    pub yearly_earnings: u64,
    /// precision: PRICE_PRECISION
    pub yearly_interest: u64,
}

#[event]
pub struct ReserveRecord {
    pub ts: i64,
    pub symbol: String,
    pub total_supplied: u64,
    pub total_borrowed: u64,
    /// precision: BPS
    pub utilization_bps: u64,
}
