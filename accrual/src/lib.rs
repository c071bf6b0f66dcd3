//! UBI accrual engine.
//!
//! Accrued UBI is a deterministic function of time, settled lazily:
//! `pending(i) = accrued_per_second × (t_now − t_last_settled(i))`
//!
//! This crate owns the per-identity accrual state machine:
//! - Start accrual for a registry-verified identity
//! - Settle pending accrual into ledger balance (minting)
//! - Final settlement and stop when an identity loses verification
//! - Governor-gated changes to the global rate
//!
//! There is no background scheduler: nothing accrues "in the background",
//! all value is computed retroactively from elapsed wall-clock seconds at
//! the moment of a synchronous call.

pub mod engine;
pub mod error;
pub mod events;
pub mod record;

pub use engine::AccrualEngine;
pub use error::AccrualError;
pub use events::MintedEvent;
pub use record::AccrualRecord;
