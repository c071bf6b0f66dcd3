//! Balance ledger for the UBI token.
//!
//! Holds per-identity fungible balances and the total supply. The accrual
//! engine credits minted amounts through this crate; it never debits, and no
//! transfer/allowance semantics live here.

pub mod balances;
pub mod error;
pub mod genesis;

pub use balances::BalanceLedger;
pub use error::LedgerError;
pub use genesis::create_genesis_ledger;
