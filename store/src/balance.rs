use crate::StoreError;
use ubi_types::Identity;

/// Store trait for persisting per-identity balances.
///
/// Balances are opaque bytes for the same reason as [`crate::AccrualStore`]:
/// the ledger crate owns its own encoding.
pub trait BalanceStore {
    fn get_balance(&self, identity: &Identity) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_balance(&self, identity: &Identity, balance: &[u8]) -> Result<(), StoreError>;
    fn iter_balances(&self) -> Result<Vec<(Identity, Vec<u8>)>, StoreError>;

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
