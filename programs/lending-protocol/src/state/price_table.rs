use anchor_lang::prelude::*;
use crate::errors::{ProtocolError, ProtocolResult};
use crate::utils::constants::{
    BPS_DENOMINATOR, MAX_ASSETS, MAX_DECIMALS, MAX_SYMBOL_LEN,
};
use crate::utils::oracle::ensure_fresh;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Asset {
    /// Ticker used as the asset identifier (e.g. "ETH")
    #[max_len(10)]
    pub symbol: String,

    /// Unit price in USD (6 decimals)
    pub price: u64,

    /// Decimals of the asset's base unit
    pub decimals: u8,

    /// Share of market value credited toward borrowing (basis points, 8000 = 80%)
    pub collateral_factor_bps: u16,

    /// Supply APY shown to depositors (basis points, informational)
    pub deposit_rate_bps: u16,

    /// Borrow APY shown to borrowers (basis points, informational)
    pub borrow_rate_bps: u16,
}

impl Asset {
    pub fn new(symbol: &str, price: u64, decimals: u8, collateral_factor_bps: u16) -> Self {
        Self {
            symbol: symbol.to_string(),
            price,
            decimals,
            collateral_factor_bps,
            deposit_rate_bps: 0,
            borrow_rate_bps: 0,
        }
    }

    pub fn with_rates(mut self, deposit_rate_bps: u16, borrow_rate_bps: u16) -> Self {
        self.deposit_rate_bps = deposit_rate_bps;
        self.borrow_rate_bps = borrow_rate_bps;
        self
    }

    pub fn validate(&self) -> ProtocolResult {
        validate_symbol(&self.symbol)?;
        if self.decimals > MAX_DECIMALS {
            return Err(ProtocolError::InvalidDecimals);
        }
        if self.collateral_factor_bps as u64 > BPS_DENOMINATOR {
            return Err(ProtocolError::InvalidCollateralFactor);
        }
        Ok(())
    }

    /// 10^decimals, the number of base units in one whole token.
    pub fn unit_scale(&self) -> u128 {
        10u128.pow(self.decimals as u32)
    }

    /// Market value of `amount` base units in USD (6 decimals).
    pub fn value_of(&self, amount: u64) -> ProtocolResult<u64> {
        let value = (amount as u128)
            .checked_mul(self.price as u128)
            .ok_or(ProtocolError::MathOverflow)?
            / self.unit_scale();

        u64::try_from(value).map_err(|_| ProtocolError::MathOverflow)
    }

    /// Market value of `amount` base units owed, rounded up so that any
    /// nonzero debt in a priced asset is worth at least one micro-dollar.
    pub fn debt_value_of(&self, amount: u64) -> ProtocolResult<u64> {
        let value = (amount as u128)
            .checked_mul(self.price as u128)
            .ok_or(ProtocolError::MathOverflow)?
            .div_ceil(self.unit_scale());

        u64::try_from(value).map_err(|_| ProtocolError::MathOverflow)
    }

    /// Market value discounted by the collateral factor.
    pub fn collateral_value_of(&self, amount: u64) -> ProtocolResult<u64> {
        let value = (amount as u128)
            .checked_mul(self.price as u128)
            .and_then(|v| v.checked_mul(self.collateral_factor_bps as u128))
            .ok_or(ProtocolError::MathOverflow)?
            / (self.unit_scale() * BPS_DENOMINATOR as u128);

        u64::try_from(value).map_err(|_| ProtocolError::MathOverflow)
    }
}

pub fn validate_symbol(symbol: &str) -> ProtocolResult {
    if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LEN {
        return Err(ProtocolError::InvalidSymbol);
    }
    Ok(())
}

/// Point-in-time snapshot of every listed asset. Replaced as a whole on each
/// price tick, never edited entry by entry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PriceTable {
    #[max_len(8)]
    pub assets: Vec<Asset>,
}

impl PriceTable {
    pub fn new(assets: Vec<Asset>) -> ProtocolResult<Self> {
        let table = Self { assets };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> ProtocolResult {
        if self.assets.len() > MAX_ASSETS {
            return Err(ProtocolError::TooManyAssets);
        }

        for (i, asset) in self.assets.iter().enumerate() {
            asset.validate()?;
            if self.assets[..i].iter().any(|a| a.symbol == asset.symbol) {
                return Err(ProtocolError::DuplicateAsset);
            }
        }

        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }

    pub fn asset(&self, symbol: &str) -> ProtocolResult<&Asset> {
        self.get(symbol).ok_or(ProtocolError::UnknownAsset)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[account]
#[derive(InitSpace)]
pub struct PriceFeed {
    /// Only this key may publish a new table
    pub authority: Pubkey,

    pub table: PriceTable,

    /// Unix timestamp of the last publish
    pub published_at: i64,

    pub bump: u8,
}

impl PriceFeed {
    pub const SEED_PREFIX: &'static [u8] = b"price_feed";

    pub fn replace(&mut self, table: PriceTable, now: i64) {
        self.table = table;
        self.published_at = now;
    }

    /// The current table, or `OracleStale` when it is older than `max_age` seconds.
    pub fn fresh_table(&self, now: i64, max_age: u64) -> ProtocolResult<&PriceTable> {
        ensure_fresh(self.published_at, now, max_age)?;
        Ok(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eth() -> Asset {
        Asset::new("ETH", 3_000_000_000, 8, 8000)
    }

    #[test]
    fn test_value_of_scales_by_decimals() {
        // 2.5 ETH @ $3000 = $7500
        assert_eq!(eth().value_of(250_000_000).unwrap(), 7_500_000_000);

        // 5000 USDC @ $1 = $5000
        let usdc = Asset::new("USDC", 1_000_000, 6, 7500);
        assert_eq!(usdc.value_of(5_000_000_000).unwrap(), 5_000_000_000);
    }

    #[test]
    fn test_debt_value_rounds_up() {
        // 18-decimal token: 1e12 wei @ $1 is exactly one micro-dollar
        let dai = Asset::new("DAI", 1_000_000, 18, 7500);
        assert_eq!(dai.debt_value_of(1_000_000_000_000).unwrap(), 1);
        assert_eq!(dai.debt_value_of(999_999_999_999).unwrap(), 1);
        assert_eq!(dai.value_of(999_999_999_999).unwrap(), 0);
        assert_eq!(dai.debt_value_of(1_000_000_000_001).unwrap(), 2);

        // Exact values are unchanged
        assert_eq!(eth().debt_value_of(250_000_000).unwrap(), 7_500_000_000);

        let unpriced = Asset::new("FREE", 0, 18, 0);
        assert_eq!(unpriced.debt_value_of(u64::MAX).unwrap(), 0);
    }

    #[test]
    fn test_collateral_value_applies_factor() {
        // 2.5 ETH @ $3000 with 80% factor = $6000
        assert_eq!(eth().collateral_value_of(250_000_000).unwrap(), 6_000_000_000);

        let worthless = Asset::new("JUNK", 5_000_000, 6, 0);
        assert_eq!(worthless.collateral_value_of(1_000_000).unwrap(), 0);
    }

    #[test]
    fn test_value_overflow_is_reported() {
        let expensive = Asset::new("BIG", u64::MAX, 0, 10_000);
        assert_eq!(
            expensive.value_of(u64::MAX),
            Err(ProtocolError::MathOverflow)
        );
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let result = PriceTable::new(vec![eth(), eth()]);
        assert_eq!(result, Err(ProtocolError::DuplicateAsset));
    }

    #[test]
    fn test_table_rejects_bad_assets() {
        let too_generous = Asset::new("ETH", 1, 8, 10_001);
        assert_eq!(
            PriceTable::new(vec![too_generous]),
            Err(ProtocolError::InvalidCollateralFactor)
        );

        let bad_decimals = Asset::new("ETH", 1, 19, 8000);
        assert_eq!(
            PriceTable::new(vec![bad_decimals]),
            Err(ProtocolError::InvalidDecimals)
        );

        let long_symbol = Asset::new("ELEVENCHARS", 1, 6, 8000);
        assert_eq!(
            PriceTable::new(vec![long_symbol]),
            Err(ProtocolError::InvalidSymbol)
        );

        let too_many = (0..=MAX_ASSETS)
            .map(|i| Asset::new(&format!("T{i}"), 1, 6, 5000))
            .collect();
        assert_eq!(PriceTable::new(too_many), Err(ProtocolError::TooManyAssets));
    }

    #[test]
    fn test_lookup() {
        let table = PriceTable::new(vec![eth()]).unwrap();
        assert_eq!(table.asset("ETH").unwrap().price, 3_000_000_000);
        assert_eq!(table.asset("DAI"), Err(ProtocolError::UnknownAsset));
    }

    #[test]
    fn test_fresh_table() {
        let feed = PriceFeed {
            authority: Pubkey::new_unique(),
            table: PriceTable::new(vec![eth()]).unwrap(),
            published_at: 1_000,
            bump: 255,
        };

        assert!(feed.fresh_table(1_030, 60).is_ok());
        assert_eq!(
            feed.fresh_table(1_061, 60).unwrap_err(),
            ProtocolError::OracleStale
        );
    }
}
