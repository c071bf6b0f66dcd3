//! Abstract storage traits for the UBI ledger.
//!
//! Every storage backend (embedded database, in-memory for testing)
//! implements these traits. The rest of the codebase depends only on the
//! traits.

pub mod accrual;
pub mod balance;
pub mod error;

pub use accrual::AccrualStore;
pub use balance::BalanceStore;
pub use error::StoreError;
