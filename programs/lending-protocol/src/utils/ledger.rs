//! Pure portfolio transitions.
//!
//! Every operation takes a snapshot and returns a new one; the input is never
//! modified, so a rejected operation leaves the caller's portfolio as it was
//! and callers can evaluate "what-if" portfolios freely.

use crate::errors::{ProtocolError, ProtocolResult};
use crate::state::{validate_symbol, Portfolio, PositionKind, PriceTable};
use crate::utils::constants::LIQUIDATION_HEALTH_FACTOR_BPS;
use crate::utils::health::health_factor;

/// Add `amount` of `symbol` to the collateral set.
pub fn supply(portfolio: &Portfolio, symbol: &str, amount: u64) -> ProtocolResult<Portfolio> {
    if amount == 0 {
        return Err(ProtocolError::InvalidAmount);
    }
    validate_symbol(symbol)?;

    let mut next = portfolio.clone();
    next.credit(PositionKind::Collateral, symbol, amount)?;
    Ok(next)
}

/// Remove `amount` of `symbol` from the collateral set. The result must keep
/// a health factor of at least 1.0.
pub fn withdraw(
    portfolio: &Portfolio,
    symbol: &str,
    amount: u64,
    table: &PriceTable,
) -> ProtocolResult<Portfolio> {
    if portfolio.find(PositionKind::Collateral, symbol).is_none() {
        return Err(ProtocolError::PositionNotFound);
    }
    if amount == 0 {
        return Err(ProtocolError::InvalidAmount);
    }

    let mut next = portfolio.clone();
    next.debit(PositionKind::Collateral, symbol, amount)?;

    if !health_factor(&next, table)?.meets(LIQUIDATION_HEALTH_FACTOR_BPS) {
        return Err(ProtocolError::InsufficientCollateral);
    }
    Ok(next)
}

/// Add `amount` of `symbol` to the debt set. The result must keep a health
/// factor of at least `min_health_factor_bps`.
pub fn borrow(
    portfolio: &Portfolio,
    symbol: &str,
    amount: u64,
    table: &PriceTable,
    min_health_factor_bps: u64,
) -> ProtocolResult<Portfolio> {
    if amount == 0 {
        return Err(ProtocolError::InvalidAmount);
    }
    table.asset(symbol)?;

    let mut next = portfolio.clone();
    next.credit(PositionKind::Debt, symbol, amount)?;

    if !health_factor(&next, table)?.meets(min_health_factor_bps) {
        return Err(ProtocolError::HealthFactorTooLow);
    }
    Ok(next)
}

/// Reduce the debt in `symbol` by `amount`, clamped to what is owed.
/// Repaying an asset with no outstanding debt returns the portfolio unchanged.
pub fn repay(portfolio: &Portfolio, symbol: &str, amount: u64) -> ProtocolResult<Portfolio> {
    if amount == 0 {
        return Err(ProtocolError::InvalidAmount);
    }
    validate_symbol(symbol)?;

    let outstanding = portfolio.debt_amount(symbol);
    let mut next = portfolio.clone();
    if outstanding > 0 {
        next.debit(PositionKind::Debt, symbol, amount.min(outstanding))?;
    }
    Ok(next)
}
