use std::fmt;

use anchor_lang::prelude::*;
use crate::errors::{ProtocolError, ProtocolResult};
use crate::state::{Portfolio, PositionKind, PriceTable};
use crate::utils::constants::{
    AT_RISK_HEALTH_FACTOR_BPS, BPS_DENOMINATOR, SAFE_HEALTH_FACTOR_BPS, WATCH_HEALTH_FACTOR_BPS,
};

/// Ratio of risk-adjusted collateral value to debt value.
///
/// `Finite` carries the ratio in basis points (12000 = 1.2). A portfolio
/// without debt is `Infinite`, which orders above every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthFactor {
    Finite(u64),
    Infinite,
}

impl HealthFactor {
    pub fn is_infinite(&self) -> bool {
        matches!(self, HealthFactor::Infinite)
    }

    /// Largest finite value; `u64::MAX` is reserved for `Infinite` in `to_bps`.
    pub const MAX_FINITE_BPS: u64 = u64::MAX - 1;

    /// Basis points, with `u64::MAX` standing in for infinity.
    pub fn to_bps(self) -> u64 {
        match self {
            HealthFactor::Finite(bps) => bps,
            HealthFactor::Infinite => u64::MAX,
        }
    }

    /// Whether the health factor is at or above `threshold_bps`.
    pub fn meets(self, threshold_bps: u64) -> bool {
        self >= HealthFactor::Finite(threshold_bps)
    }
}

impl fmt::Display for HealthFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthFactor::Infinite => write!(f, "∞"),
            HealthFactor::Finite(bps) => write!(
                f,
                "{}.{:02}",
                bps / BPS_DENOMINATOR,
                (bps % BPS_DENOMINATOR) / 100
            ),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Safe,
    Watch,
    AtRisk,
    Liquidatable,
}

/// Bucket a health factor: >= 2.0 Safe, >= 1.5 Watch, >= 1.0 AtRisk, else Liquidatable.
pub fn classify_risk(health_factor: HealthFactor) -> RiskLevel {
    if health_factor.meets(SAFE_HEALTH_FACTOR_BPS) {
        RiskLevel::Safe
    } else if health_factor.meets(WATCH_HEALTH_FACTOR_BPS) {
        RiskLevel::Watch
    } else if health_factor.meets(AT_RISK_HEALTH_FACTOR_BPS) {
        RiskLevel::AtRisk
    } else {
        RiskLevel::Liquidatable
    }
}

/// Sum of `amount × price × collateral_factor` over the collateral set (USD, 6 decimals)
pub fn compute_collateral_value(portfolio: &Portfolio, table: &PriceTable) -> ProtocolResult<u64> {
    portfolio
        .positions(PositionKind::Collateral)
        .iter()
        .try_fold(0u64, |total, position| {
            let value = table.asset(&position.symbol)?.collateral_value_of(position.amount)?;
            total.checked_add(value).ok_or(ProtocolError::MathOverflow)
        })
}

/// Sum of `amount × price` over the debt set (USD, 6 decimals). Debt is never
/// discounted and each position is rounded up.
pub fn compute_debt_value(portfolio: &Portfolio, table: &PriceTable) -> ProtocolResult<u64> {
    portfolio
        .positions(PositionKind::Debt)
        .iter()
        .try_fold(0u64, |total, position| {
            let value = table.asset(&position.symbol)?.debt_value_of(position.amount)?;
            total.checked_add(value).ok_or(ProtocolError::MathOverflow)
        })
}

/// Calculate loan-to-value ratio in basis points
/// LTV = (debt_value / collateral_value) * 10000
pub fn calculate_ltv(collateral_value: u64, debt_value: u64) -> ProtocolResult<u64> {
    if collateral_value == 0 {
        return Err(ProtocolError::InvalidAmount);
    }

    let ltv = debt_value as u128 * BPS_DENOMINATOR as u128 / collateral_value as u128;
    u64::try_from(ltv).map_err(|_| ProtocolError::MathOverflow)
}

/// Calculate health factor
/// Health Factor = (collateral_value / debt_value)
/// Below 1.0 the account is liquidatable, see `classify_risk` for the other buckets.
/// Ratios too large for a bps `u64` clamp to `HealthFactor::MAX_FINITE_BPS`.
pub fn calculate_health_factor(collateral_value: u64, debt_value: u64) -> HealthFactor {
    if debt_value == 0 {
        return HealthFactor::Infinite;
    }

    let ratio = collateral_value as u128 * BPS_DENOMINATOR as u128 / debt_value as u128;
    HealthFactor::Finite(
        u64::try_from(ratio)
            .unwrap_or(HealthFactor::MAX_FINITE_BPS)
            .min(HealthFactor::MAX_FINITE_BPS),
    )
}

/// Health factor of `portfolio` from values already computed against one table.
/// Only an empty debt set is `Infinite`; debt that prices to zero cannot be assessed.
pub fn assess_health(
    portfolio: &Portfolio,
    collateral_value: u64,
    debt_value: u64,
) -> ProtocolResult<HealthFactor> {
    if !portfolio.has_debt() {
        return Ok(HealthFactor::Infinite);
    }
    if debt_value == 0 {
        return Err(ProtocolError::OraclePriceUnavailable);
    }

    Ok(calculate_health_factor(collateral_value, debt_value))
}

pub fn health_factor(portfolio: &Portfolio, table: &PriceTable) -> ProtocolResult<HealthFactor> {
    if !portfolio.has_debt() {
        return Ok(HealthFactor::Infinite);
    }

    let debt_value = compute_debt_value(portfolio, table)?;
    let collateral_value = compute_collateral_value(portfolio, table)?;
    assess_health(portfolio, collateral_value, debt_value)
}

/// Largest additional amount of `borrow_symbol` (base units) that keeps the
/// health factor at or above `threshold_bps`:
/// (collateral_value - threshold * debt_value) / (threshold * price), floored at zero.
pub fn max_additional_borrow(
    portfolio: &Portfolio,
    table: &PriceTable,
    borrow_symbol: &str,
    threshold_bps: u64,
) -> ProtocolResult<u64> {
    if threshold_bps == 0 {
        return Err(ProtocolError::InvalidHealthFactorThreshold);
    }

    let asset = table.asset(borrow_symbol)?;
    if asset.price == 0 {
        return Err(ProtocolError::OraclePriceUnavailable);
    }

    let collateral_value = compute_collateral_value(portfolio, table)? as u128;
    let debt_value = compute_debt_value(portfolio, table)?;
    if portfolio.has_debt() && debt_value == 0 {
        return Err(ProtocolError::OraclePriceUnavailable);
    }

    // Both sides scaled by BPS_DENOMINATOR so the threshold stays integral.
    let capacity = collateral_value * BPS_DENOMINATOR as u128;
    let required = debt_value as u128 * threshold_bps as u128;
    let headroom = match capacity.checked_sub(required) {
        Some(headroom) if headroom > 0 => headroom,
        _ => return Ok(0),
    };

    // Floor to whole micro-dollars first: the new debt is valued rounding up.
    let value = headroom / threshold_bps as u128;
    let amount = value
        .checked_mul(asset.unit_scale())
        .ok_or(ProtocolError::MathOverflow)?
        / asset.price as u128;

    Ok(u64::try_from(amount).unwrap_or(u64::MAX))
}
