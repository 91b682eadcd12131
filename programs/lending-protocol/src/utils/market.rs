use crate::errors::{ProtocolError, ProtocolResult};
use crate::state::{Portfolio, PositionKind, PriceTable};
use crate::utils::constants::BPS_DENOMINATOR;
use crate::utils::health::{
    assess_health, calculate_ltv, classify_risk, compute_collateral_value, compute_debt_value,
    HealthFactor, RiskLevel,
};

/// Dashboard view of one portfolio against one price snapshot. Values are USD (6 decimals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSummary {
    /// Market value of everything supplied, before collateral factors
    pub supplied_value: u64,
    /// Supplied value after collateral factors
    pub collateral_value: u64,
    pub debt_value: u64,
    /// Debt over supplied value (basis points), None when nothing is supplied
    pub loan_to_value_bps: Option<u64>,
    pub health_factor: HealthFactor,
    pub risk: RiskLevel,
    /// Estimated one-year earnings on the collateral set at each asset's supply rate
    pub yearly_earnings: u64,
    /// Estimated one-year interest on the debt set at each asset's borrow rate
    pub yearly_interest: u64,
}

pub fn compute_supplied_value(portfolio: &Portfolio, table: &PriceTable) -> ProtocolResult<u64> {
    portfolio
        .positions(PositionKind::Collateral)
        .iter()
        .try_fold(0u64, |total, position| {
            let value = table.asset(&position.symbol)?.value_of(position.amount)?;
            total.checked_add(value).ok_or(ProtocolError::MathOverflow)
        })
}

/// Sum over one side of the portfolio of the yearly estimate at that side's rate.
pub fn compute_yearly_interest(
    portfolio: &Portfolio,
    table: &PriceTable,
    kind: PositionKind,
) -> ProtocolResult<u64> {
    portfolio.positions(kind).iter().try_fold(0u64, |total, position| {
        let asset = table.asset(&position.symbol)?;
        let (value, rate_bps) = match kind {
            PositionKind::Collateral => (asset.value_of(position.amount)?, asset.deposit_rate_bps),
            PositionKind::Debt => (asset.debt_value_of(position.amount)?, asset.borrow_rate_bps),
        };
        total
            .checked_add(estimated_yearly_interest(value, rate_bps))
            .ok_or(ProtocolError::MathOverflow)
    })
}

pub fn summarize(portfolio: &Portfolio, table: &PriceTable) -> ProtocolResult<AccountSummary> {
    let supplied_value = compute_supplied_value(portfolio, table)?;
    let collateral_value = compute_collateral_value(portfolio, table)?;
    let debt_value = compute_debt_value(portfolio, table)?;

    let loan_to_value_bps = if supplied_value > 0 {
        Some(calculate_ltv(supplied_value, debt_value)?)
    } else {
        None
    };

    let health_factor = assess_health(portfolio, collateral_value, debt_value)?;

    Ok(AccountSummary {
        supplied_value,
        collateral_value,
        debt_value,
        loan_to_value_bps,
        health_factor,
        risk: classify_risk(health_factor),
        yearly_earnings: compute_yearly_interest(portfolio, table, PositionKind::Collateral)?,
        yearly_interest: compute_yearly_interest(portfolio, table, PositionKind::Debt)?,
    })
}

/// Simple one-year interest on `amount` at `rate_bps`. Display only, nothing accrues.
pub fn estimated_yearly_interest(amount: u64, rate_bps: u16) -> u64 {
    let interest = amount as u128 * rate_bps as u128 / BPS_DENOMINATOR as u128;
    u64::try_from(interest).unwrap_or(u64::MAX)
}
