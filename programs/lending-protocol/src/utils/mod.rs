pub mod constants;
pub mod health;
pub mod ledger;
pub mod market;
pub mod oracle;

pub use constants::*;
pub use health::*;
pub use ledger::*;
pub use market::*;
pub use oracle::*;
