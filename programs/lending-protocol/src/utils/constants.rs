/// Denominator for every basis-point quantity (collateral factors, rates, health factors).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Prices and USD values carry 6 decimals.
pub const PRICE_PRECISION: u64 = 1_000_000;

/// Health factor 1.0. Below this an account is eligible for liquidation.
pub const LIQUIDATION_HEALTH_FACTOR_BPS: u64 = 10_000;

/// Borrow floor applied when the config does not override it (1.2).
pub const DEFAULT_MIN_HEALTH_FACTOR_BPS: u64 = 12_000;

/// Risk buckets used by `classify_risk`.
pub const SAFE_HEALTH_FACTOR_BPS: u64 = 20_000;
pub const WATCH_HEALTH_FACTOR_BPS: u64 = 15_000;
pub const AT_RISK_HEALTH_FACTOR_BPS: u64 = 10_000;

pub const DEFAULT_MAX_PRICE_AGE: u64 = 60;

pub const MAX_ASSETS: usize = 8;
pub const MAX_POSITIONS: usize = 8;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_DECIMALS: u8 = 18;
