pub mod config;
pub mod events;
pub mod portfolio;
pub mod price_table;
pub mod reserve;

pub use config::*;
pub use events::*;
pub use portfolio::*;
pub use price_table::*;
pub use reserve::*;
