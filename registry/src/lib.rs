//! Proof-of-Humanity registry interface.
//!
//! The registry is the external source of truth for human-uniqueness
//! verification. The accrual engine depends only on the `is_registered`
//! boolean; any conforming implementation (live registry, configured
//! allowlist, scripted stand-in for tests) is interchangeable.
//!
//! The engine never mutates the registry, and never caches its answers
//! across calls — registration status is volatile external truth, sampled
//! at the moment of each mutating call.

pub mod allowlist;
pub mod registry;
pub mod submission;

pub use allowlist::AllowlistRegistry;
pub use registry::HumanityRegistry;
pub use submission::{SubmissionInfo, SubmissionStatus};
