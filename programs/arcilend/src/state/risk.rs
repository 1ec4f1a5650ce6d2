use anchor_lang::prelude::*;

use crate::constants::{MAX_RISK_REPORT_AGE_SECS, MIN_RISK_SCORE_BPS};

/// Output of the confidential credit-score computation. Only the registered
/// MPC node may write one; the underlying borrower data stays off-chain.
#[account]
#[derive(InitSpace)]
pub struct RiskReport {
    pub position: Pubkey,
    pub score_bps: u16,
    pub published_at: i64,
    pub bump: u8,
}

impl RiskReport {
    pub fn is_fresh(&self, now: i64) -> bool {
        now.saturating_sub(self.published_at) < MAX_RISK_REPORT_AGE_SECS
    }

    pub fn is_passing(&self) -> bool {
        self.score_bps >= MIN_RISK_SCORE_BPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(score_bps: u16, published_at: i64) -> RiskReport {
        RiskReport {
            position: Pubkey::new_unique(),
            score_bps,
            published_at,
            bump: 255,
        }
    }

    #[test]
    fn freshness_window_is_one_hour() {
        let r = report(8_000, 10_000);
        assert!(r.is_fresh(10_000));
        assert!(r.is_fresh(10_000 + 3_599));
        assert!(!r.is_fresh(10_000 + 3_600));
    }

    #[test]
    fn passing_score_is_at_least_half() {
        assert!(report(5_000, 0).is_passing());
        assert!(report(10_000, 0).is_passing());
        assert!(!report(4_999, 0).is_passing());
    }
}
