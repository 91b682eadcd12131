pub mod initialize;
pub mod publish_prices;
pub mod initialize_reserve;
pub mod open_portfolio;
pub mod supply;
pub mod withdraw;
pub mod borrow;
pub mod repay;
pub mod refresh_health;
pub mod close_portfolio;
pub mod update_config;

pub use initialize::*;
pub use publish_prices::*;
pub use initialize_reserve::*;
pub use open_portfolio::*;
pub use supply::*;
pub use withdraw::*;
pub use borrow::*;
pub use repay::*;
pub use refresh_health::*;
pub use close_portfolio::*;
pub use update_config::*;
