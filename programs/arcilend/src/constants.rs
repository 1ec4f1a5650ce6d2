/// Basis-point scale: 10_000 bps = 100%.
pub const BPS_SCALE: u64 = 10_000;

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Upper bound on a pool's borrow rate (50% APR).
pub const MAX_INTEREST_RATE_BPS: u16 = 5_000;

/// A pool must demand at least 100% collateralization.
pub const MIN_COLLATERAL_RATIO_BPS: u16 = 10_000;

/// Oracle prices older than this are rejected.
pub const MAX_PRICE_AGE_SECS: i64 = 300;

/// Risk reports older than this no longer gate borrowing.
pub const MAX_RISK_REPORT_AGE_SECS: i64 = 3_600;

/// Minimum confidential credit score required to borrow.
pub const MIN_RISK_SCORE_BPS: u16 = 5_000;

pub const MAX_RISK_SCORE_BPS: u16 = 10_000;

/// At most half of a position's debt may be repaid in one liquidation.
pub const LIQUIDATION_CLOSE_FACTOR_BPS: u64 = 5_000;

/// Collateral bonus paid to liquidators on top of the repaid value.
pub const LIQUIDATION_BONUS_BPS: u64 = 500;
