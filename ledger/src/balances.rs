//! Per-identity balance bookkeeping.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ubi_store::BalanceStore;
use ubi_types::{Identity, UbiAmount};

/// The balance ledger — per-identity balances plus the running total supply.
///
/// Credits are monotonically additive; there is no debit path. Every credit
/// is checked against u128 overflow on both the identity's balance and the
/// total supply, and fails without mutating either on overflow.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BalanceLedger {
    balances: HashMap<Identity, u128>,
    total_supply: u128,
}

impl BalanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to an identity's balance.
    ///
    /// A zero credit is a valid no-op (zero-elapsed settlements mint zero).
    pub fn credit(&mut self, identity: &Identity, amount: UbiAmount) -> Result<(), LedgerError> {
        let current = self.balances.get(identity).copied().unwrap_or(0);
        let updated = current
            .checked_add(amount.raw())
            .ok_or(LedgerError::Overflow)?;
        let supply = self
            .total_supply
            .checked_add(amount.raw())
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(identity.clone(), updated);
        self.total_supply = supply;
        Ok(())
    }

    /// Current balance of an identity. Unknown identities hold zero.
    pub fn balance_of(&self, identity: &Identity) -> UbiAmount {
        UbiAmount::new(self.balances.get(identity).copied().unwrap_or(0))
    }

    /// Total supply across all identities.
    pub fn total_supply(&self) -> UbiAmount {
        UbiAmount::new(self.total_supply)
    }

    /// Number of identities holding a balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }
}

impl BalanceLedger {
    /// Persist all balances to a balance store.
    pub fn save_to_store(&self, store: &dyn BalanceStore) -> Result<(), LedgerError> {
        let supply_bytes = self.total_supply.to_be_bytes();
        store
            .put_meta(b"total_supply", &supply_bytes)
            .map_err(|e| LedgerError::Store(e.to_string()))?;

        for (identity, balance) in &self.balances {
            store
                .put_balance(identity, &balance.to_be_bytes())
                .map_err(|e| LedgerError::Store(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore a ledger from a balance store.
    pub fn load_from_store(store: &dyn BalanceStore) -> Result<Self, LedgerError> {
        let total_supply = match store.get_meta(b"total_supply") {
            Ok(Some(bytes)) if bytes.len() >= 16 => {
                u128::from_be_bytes(bytes[..16].try_into().expect("length checked above"))
            }
            _ => 0,
        };

        let entries = store
            .iter_balances()
            .map_err(|e| LedgerError::Store(e.to_string()))?;
        let mut balances = HashMap::new();
        for (identity, bytes) in entries {
            if bytes.len() < 16 {
                return Err(LedgerError::Store(format!(
                    "balance entry for {} is truncated",
                    identity
                )));
            }
            let balance = u128::from_be_bytes(bytes[..16].try_into().expect("length checked above"));
            balances.insert(identity, balance);
        }
        Ok(Self {
            balances,
            total_supply,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity(n: u8) -> Identity {
        Identity::new(format!("ubi_{:0>40}", n))
    }

    #[test]
    fn credit_accumulates() {
        let mut ledger = BalanceLedger::new();
        let alice = test_identity(1);

        assert_eq!(ledger.balance_of(&alice), UbiAmount::ZERO);
        ledger.credit(&alice, UbiAmount::new(2000)).unwrap();
        ledger.credit(&alice, UbiAmount::new(500)).unwrap();
        assert_eq!(ledger.balance_of(&alice), UbiAmount::new(2500));
        assert_eq!(ledger.total_supply(), UbiAmount::new(2500));
    }

    #[test]
    fn zero_credit_is_a_valid_noop() {
        let mut ledger = BalanceLedger::new();
        let alice = test_identity(1);
        ledger.credit(&alice, UbiAmount::ZERO).unwrap();
        assert_eq!(ledger.balance_of(&alice), UbiAmount::ZERO);
        assert_eq!(ledger.holder_count(), 1);
    }

    #[test]
    fn overflow_credit_leaves_ledger_untouched() {
        let mut ledger = BalanceLedger::new();
        let alice = test_identity(1);
        ledger.credit(&alice, UbiAmount::new(u128::MAX)).unwrap();

        let result = ledger.credit(&alice, UbiAmount::new(1));
        assert!(matches!(result, Err(LedgerError::Overflow)));
        assert_eq!(ledger.balance_of(&alice), UbiAmount::new(u128::MAX));
        assert_eq!(ledger.total_supply(), UbiAmount::new(u128::MAX));
    }

    #[test]
    fn store_roundtrip_preserves_balances_and_supply() {
        let mut ledger = BalanceLedger::new();
        let alice = test_identity(1);
        let bob = test_identity(2);
        ledger.credit(&alice, UbiAmount::new(2000)).unwrap();
        ledger.credit(&bob, UbiAmount::new(300)).unwrap();

        let store = ubi_nullables::NullBalanceStore::new();
        ledger.save_to_store(&store).unwrap();

        let restored = BalanceLedger::load_from_store(&store).unwrap();
        assert_eq!(restored.balance_of(&alice), UbiAmount::new(2000));
        assert_eq!(restored.balance_of(&bob), UbiAmount::new(300));
        assert_eq!(restored.total_supply(), UbiAmount::new(2300));
        assert_eq!(restored.holder_count(), 2);
    }

    #[test]
    fn supply_overflow_does_not_mutate_balance() {
        let mut ledger = BalanceLedger::new();
        let alice = test_identity(1);
        let bob = test_identity(2);
        ledger.credit(&alice, UbiAmount::new(u128::MAX)).unwrap();

        // Bob's balance would fit, but the total supply would not.
        let result = ledger.credit(&bob, UbiAmount::new(1));
        assert!(matches!(result, Err(LedgerError::Overflow)));
        assert_eq!(ledger.balance_of(&bob), UbiAmount::ZERO);
    }
}
