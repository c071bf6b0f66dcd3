//! Fundamental types for the UBI ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identity addresses, token amounts, timestamps, and the
//! deployment parameters of the ledger.

pub mod amount;
pub mod identity;
pub mod params;
pub mod time;

pub use amount::UbiAmount;
pub use identity::Identity;
pub use params::LedgerParams;
pub use time::Timestamp;
