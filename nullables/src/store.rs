//! Nullable stores — thread-safe in-memory storage for testing.

use std::collections::HashMap;
use std::sync::Mutex;
use ubi_store::{AccrualStore, BalanceStore, StoreError};
use ubi_types::Identity;

/// An in-memory accrual store for testing.
pub struct NullAccrualStore {
    records: Mutex<HashMap<String, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullAccrualStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullAccrualStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccrualStore for NullAccrualStore {
    fn get_record(&self, identity: &Identity) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.records.lock().unwrap().get(identity.as_str()).cloned())
    }

    fn put_record(&self, identity: &Identity, record: &[u8]) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(identity.to_string(), record.to_vec());
        Ok(())
    }

    fn delete_record(&self, identity: &Identity) -> Result<(), StoreError> {
        self.records.lock().unwrap().remove(identity.as_str());
        Ok(())
    }

    fn iter_records(&self) -> Result<Vec<(Identity, Vec<u8>)>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .map(|(addr, bytes)| (Identity::new(addr.clone()), bytes.clone()))
            .collect())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}

/// An in-memory balance store for testing.
pub struct NullBalanceStore {
    balances: Mutex<HashMap<String, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullBalanceStore {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullBalanceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceStore for NullBalanceStore {
    fn get_balance(&self, identity: &Identity) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(identity.as_str())
            .cloned())
    }

    fn put_balance(&self, identity: &Identity, balance: &[u8]) -> Result<(), StoreError> {
        self.balances
            .lock()
            .unwrap()
            .insert(identity.to_string(), balance.to_vec());
        Ok(())
    }

    fn iter_balances(&self) -> Result<Vec<(Identity, Vec<u8>)>, StoreError> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .iter()
            .map(|(addr, bytes)| (Identity::new(addr.clone()), bytes.clone()))
            .collect())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
