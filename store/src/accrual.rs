use crate::StoreError;
use ubi_types::Identity;

/// Store trait for persisting accrual engine state to durable storage.
///
/// Uses opaque `Vec<u8>` so the store doesn't depend on the `ubi-accrual`
/// crate (which would create a circular dependency). The accrual engine
/// serializes/deserializes its own types.
pub trait AccrualStore {
    fn get_record(&self, identity: &Identity) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_record(&self, identity: &Identity, record: &[u8]) -> Result<(), StoreError>;
    fn delete_record(&self, identity: &Identity) -> Result<(), StoreError>;
    fn iter_records(&self) -> Result<Vec<(Identity, Vec<u8>)>, StoreError>;

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
