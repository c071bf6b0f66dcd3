//! Allowlist-backed registry — a local mirror of registration status.
//!
//! Useful for deployments where registration decisions arrive out of band
//! (an operator, a bridge from the live registry) and for the daemon's
//! single-process mode.

use crate::{HumanityRegistry, SubmissionInfo, SubmissionStatus};
use std::collections::HashMap;
use ubi_types::{Identity, Timestamp};

/// A registry backed by an explicit set of registered identities.
#[derive(Clone, Debug, Default)]
pub struct AllowlistRegistry {
    registered: HashMap<Identity, Timestamp>,
}

impl AllowlistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an identity as registered as of `at`.
    pub fn register(&mut self, identity: Identity, at: Timestamp) {
        self.registered.insert(identity, at);
    }

    /// Drop an identity from the registry.
    pub fn remove(&mut self, identity: &Identity) {
        self.registered.remove(identity);
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

impl HumanityRegistry for AllowlistRegistry {
    fn is_registered(&self, identity: &Identity) -> bool {
        self.registered.contains_key(identity)
    }

    fn submission_info(&self, identity: &Identity) -> Option<SubmissionInfo> {
        self.registered.get(identity).map(|&at| SubmissionInfo {
            status: SubmissionStatus::None,
            submission_time: at,
            registered: true,
            has_vouched: false,
        })
    }
}
