use crate::state::{Asset, Portfolio, PositionKind, PriceTable};
use crate::utils::constants::PRICE_PRECISION;

/// One USD of value
pub const USD: u64 = PRICE_PRECISION;

/// Whole-token amounts in base units
pub const ETH: u64 = 100_000_000;
pub const DAI: u64 = 1_000_000;
pub const USDC: u64 = 1_000_000;

/// The three markets of the demo front end
pub fn demo_table() -> PriceTable {
    PriceTable::new(vec![
        Asset::new("ETH", 3_000 * USD, 8, 8000).with_rates(150, 350),
        Asset::new("DAI", USD, 6, 7500).with_rates(280, 420),
        Asset::new("USDC", USD, 6, 7500).with_rates(300, 450),
    ])
    .unwrap()
}

/// ETH next to an 18-decimal DAI, where small debts fall below one micro-dollar
pub fn wei_table() -> PriceTable {
    PriceTable::new(vec![
        Asset::new("ETH", 3_000 * USD, 8, 8000),
        Asset::new("DAI", USD, 18, 7500),
    ])
    .unwrap()
}

pub fn portfolio_with(collateral: &[(&str, u64)], debt: &[(&str, u64)]) -> Portfolio {
    let mut portfolio = Portfolio::new();
    for (symbol, amount) in collateral {
        portfolio.credit(PositionKind::Collateral, symbol, *amount).unwrap();
    }
    for (symbol, amount) in debt {
        portfolio.credit(PositionKind::Debt, symbol, *amount).unwrap();
    }
    portfolio
}

/// 2.5 ETH supplied against 5000 USDC borrowed: health factor 1.2
pub fn eth_usdc_portfolio() -> Portfolio {
    portfolio_with(&[("ETH", 250_000_000)], &[("USDC", 5_000 * USDC)])
}
