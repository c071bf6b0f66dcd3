//! Per-identity accrual state.

use serde::{Deserialize, Serialize};
use ubi_types::Timestamp;

/// Accrual state for a single identity.
///
/// `last_settled_at == None` means the identity is not accruing — the
/// record for every identity logically exists from genesis in this idle
/// state, and only materializes in the engine's map once touched.
///
/// Pending value is derived, never stored:
/// `pending = (now − last_settled_at) × accrued_per_second`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualRecord {
    /// The point up to which accrued value has been settled into balance,
    /// `None` when no accrual is in progress.
    last_settled_at: Option<Timestamp>,
}

impl AccrualRecord {
    /// The idle record — not accruing.
    pub fn idle() -> Self {
        Self {
            last_settled_at: None,
        }
    }

    pub fn is_accruing(&self) -> bool {
        self.last_settled_at.is_some()
    }

    /// The last settlement point, surfaced as epoch 0 when not accruing.
    pub fn last_settled_at(&self) -> Timestamp {
        self.last_settled_at.unwrap_or(Timestamp::EPOCH)
    }

    /// Begin accruing from `now`. Caller has already checked the record is
    /// idle.
    pub fn start(&mut self, now: Timestamp) {
        self.last_settled_at = Some(now);
    }

    /// Advance the settlement point to `now`, keeping the record accruing.
    pub fn settle(&mut self, now: Timestamp) {
        self.last_settled_at = Some(now);
    }

    /// Exit the accruing state entirely.
    pub fn clear(&mut self) {
        self.last_settled_at = None;
    }

    /// Value accrued since the last settlement, at `rate` raw units per
    /// second. Zero when not accruing; elapsed time is clamped at zero.
    ///
    /// Returns `None` on u128 overflow.
    pub fn pending_checked(&self, rate: u128, now: Timestamp) -> Option<u128> {
        match self.last_settled_at {
            None => Some(0),
            Some(since) => {
                let elapsed = since.elapsed_since(now);
                rate.checked_mul(elapsed as u128)
            }
        }
    }

    /// Value accrued since the last settlement, returning 0 on overflow.
    pub fn pending(&self, rate: u128, now: Timestamp) -> u128 {
        self.pending_checked(rate, now).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_record_has_zero_pending() {
        let record = AccrualRecord::idle();
        assert!(!record.is_accruing());
        assert_eq!(record.last_settled_at(), Timestamp::EPOCH);
        assert_eq!(record.pending(1000, Timestamp::new(99_999)), 0);
    }

    #[test]
    fn pending_is_elapsed_times_rate() {
        let mut record = AccrualRecord::idle();
        record.start(Timestamp::new(1000));
        assert!(record.is_accruing());
        assert_eq!(record.pending(10, Timestamp::new(1000)), 0);
        assert_eq!(record.pending(10, Timestamp::new(1002)), 20);
        assert_eq!(record.pending(10, Timestamp::new(2000)), 10_000);
    }

    #[test]
    fn pending_clamps_backwards_clock_to_zero() {
        let mut record = AccrualRecord::idle();
        record.start(Timestamp::new(1000));
        assert_eq!(record.pending(10, Timestamp::new(500)), 0);
    }

    #[test]
    fn settle_advances_the_clock() {
        let mut record = AccrualRecord::idle();
        record.start(Timestamp::new(1000));
        record.settle(Timestamp::new(1500));
        assert!(record.is_accruing());
        assert_eq!(record.last_settled_at(), Timestamp::new(1500));
        assert_eq!(record.pending(10, Timestamp::new(1600)), 1000);
    }

    #[test]
    fn clear_returns_record_to_idle() {
        let mut record = AccrualRecord::idle();
        record.start(Timestamp::new(1000));
        record.clear();
        assert!(!record.is_accruing());
        assert_eq!(record.last_settled_at(), Timestamp::EPOCH);
        assert_eq!(record.pending(10, Timestamp::new(2000)), 0);
    }

    #[test]
    fn pending_checked_detects_overflow() {
        let mut record = AccrualRecord::idle();
        record.start(Timestamp::new(0));
        assert!(record.pending_checked(u128::MAX, Timestamp::new(2)).is_none());
        assert_eq!(record.pending(u128::MAX, Timestamp::new(2)), 0);
    }
}
