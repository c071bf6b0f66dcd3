//! Nullable infrastructure for deterministic testing.
//!
//! All external dependencies of the engine (clock, humanity registry,
//! storage) are abstracted behind traits or explicit parameters. This crate
//! provides test-friendly implementations that:
//! - Return deterministic, programmable values
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod registry;
pub mod store;

pub use clock::NullClock;
pub use registry::ScriptedRegistry;
pub use store::{NullAccrualStore, NullBalanceStore};
