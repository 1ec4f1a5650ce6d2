use anchor_lang::prelude::*;

#[error_code]
pub enum ArcilendError {
    #[msg("Invalid interest rate: must be between 1 and 5000 basis points")]
    InvalidInterestRate,
    #[msg("Invalid collateral ratio: must be at least 10000 basis points")]
    InvalidCollateralRatio,
    #[msg("Invalid liquidation threshold: must be positive and below the collateral ratio")]
    InvalidLiquidationThreshold,
    #[msg("Invalid MPC node account")]
    InvalidMpcNode,
    #[msg("Invalid oracle account")]
    InvalidOracleAccount,
    #[msg("Invalid collateral mint")]
    InvalidCollateralMint,
    #[msg("Invalid debt mint")]
    InvalidDebtMint,
    #[msg("Pool is paused")]
    PoolPaused,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("No collateral deposited")]
    NoCollateralDeposited,
    #[msg("No outstanding debt")]
    NoOutstandingDebt,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Insufficient collateral")]
    InsufficientCollateral,
    #[msg("Insufficient pool liquidity")]
    InsufficientLiquidity,
    #[msg("Borrow would leave the position below the required collateral ratio")]
    CollateralRatioViolated,
    #[msg("Position is above the liquidation threshold")]
    PositionHealthy,
    #[msg("Repay amount exceeds the liquidation close factor")]
    ExceedsCloseFactor,
    #[msg("Empty oracle account")]
    EmptyOracleAccount,
    #[msg("Failed to borrow oracle data")]
    FailedToBorrowOracleData,
    #[msg("Invalid pyth account")]
    InvalidPythAccount,
    #[msg("Invalid price status of pyth account")]
    InvalidPriceStatus,
    #[msg("Invalid price of pyth account")]
    InvalidPrice,
    #[msg("Stale oracle data: price not updated within the last 5 minutes")]
    StalePrice,
    #[msg("Risk report is too old to authorize a borrow")]
    StaleRiskReport,
    #[msg("Risk score below the minimum required to borrow")]
    RiskScoreTooLow,
    #[msg("Risk score exceeds 10000 basis points")]
    InvalidRiskScore,
    #[msg("Risk report does not belong to this position")]
    RiskReportMismatch,
    #[msg("Unauthorized user")]
    UnauthorizedUser,
    #[msg("Unauthorized MPC node")]
    UnauthorizedMpcNode,
    #[msg("Unauthorized pool authority")]
    UnauthorizedAuthority,
    #[msg("Position does not belong to this pool")]
    PositionPoolMismatch,
    #[msg("Math overflow: amount too large to process")]
    MathOverflow,
    #[msg("Math under flow")]
    MathUnderflow,
}
