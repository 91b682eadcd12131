use anchor_lang::prelude::*;

pub type ProtocolResult<T = ()> = std::result::Result<T, ProtocolError>;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum ProtocolError {
    #[msg("Amount must be greater than zero and within the position size")]
    InvalidAmount,

    #[msg("Asset is not listed in the price table")]
    UnknownAsset,

    #[msg("No position exists for this asset")]
    PositionNotFound,

    #[msg("Withdrawal would leave the account eligible for liquidation")]
    InsufficientCollateral,

    #[msg("Resulting health factor is below the required minimum")]
    HealthFactorTooLow,

    #[msg("Math overflow occurred")]
    MathOverflow,

    #[msg("Math underflow occurred")]
    MathUnderflow,

    #[msg("Protocol is currently paused")]
    ProtocolPaused,

    #[msg("Unauthorized: only protocol authority can perform this action")]
    Unauthorized,

    #[msg("Portfolio owner mismatch")]
    InvalidOwner,

    #[msg("Collateral factor must not exceed 10000 basis points")]
    InvalidCollateralFactor,

    #[msg("Asset decimals must not exceed 18")]
    InvalidDecimals,

    #[msg("Asset symbol is empty or too long")]
    InvalidSymbol,

    #[msg("Asset is listed more than once")]
    DuplicateAsset,

    #[msg("Price table holds too many assets")]
    TooManyAssets,

    #[msg("Portfolio holds too many positions")]
    TooManyPositions,

    #[msg("Health factor threshold is out of range")]
    InvalidHealthFactorThreshold,

    #[msg("Price table is stale")]
    OracleStale,

    #[msg("Oracle price is not available")]
    OraclePriceUnavailable,

    #[msg("Reserve has insufficient liquidity")]
    InsufficientLiquidity,

    #[msg("Portfolio still holds positions")]
    PortfolioNotEmpty,
}
