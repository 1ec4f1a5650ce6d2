use anchor_lang::prelude::*;

use crate::error::ArcilendError;
use crate::interest;

#[account]
#[derive(InitSpace)]
pub struct Position {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub collateral_amount: u64,
    pub debt_amount: u64,
    pub last_accrual_ts: i64,
    pub bump: u8,
}

impl Position {
    /// Folds interest accrued since `last_accrual_ts` into the debt and
    /// returns the newly accrued amount so the pool aggregate can follow.
    pub fn accrue_interest(&mut self, interest_rate_bps: u16, now: i64) -> Result<u64> {
        let elapsed = now.saturating_sub(self.last_accrual_ts);
        if elapsed <= 0 {
            return Ok(0);
        }

        let accrued = interest::accrued_interest(self.debt_amount, interest_rate_bps, elapsed as u64)?;
        self.debt_amount = self
            .debt_amount
            .checked_add(accrued)
            .ok_or(ArcilendError::MathOverflow)?;
        self.last_accrual_ts = now;

        Ok(accrued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(debt: u64, last_accrual_ts: i64) -> Position {
        Position {
            owner: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            collateral_amount: 0,
            debt_amount: debt,
            last_accrual_ts,
            bump: 255,
        }
    }

    #[test]
    fn accrues_simple_interest_and_advances_timestamp() {
        let mut p = position(1_000_000_000, 0);
        // 10% APR over a full year
        let accrued = p.accrue_interest(1_000, 31_536_000).unwrap();
        assert_eq!(accrued, 100_000_000);
        assert_eq!(p.debt_amount, 1_100_000_000);
        assert_eq!(p.last_accrual_ts, 31_536_000);
    }

    #[test]
    fn zero_debt_accrues_nothing() {
        let mut p = position(0, 100);
        assert_eq!(p.accrue_interest(1_000, 1_000_000).unwrap(), 0);
        assert_eq!(p.debt_amount, 0);
        assert_eq!(p.last_accrual_ts, 1_000_000);
    }

    #[test]
    fn clock_going_backwards_accrues_nothing() {
        let mut p = position(1_000_000, 5_000);
        assert_eq!(p.accrue_interest(1_000, 4_000).unwrap(), 0);
        assert_eq!(p.debt_amount, 1_000_000);
        assert_eq!(p.last_accrual_ts, 5_000);
    }
}
