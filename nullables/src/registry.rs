//! Scripted humanity registry — programmable answers for testing.

use std::collections::HashMap;
use std::sync::Mutex;
use ubi_registry::{HumanityRegistry, SubmissionInfo, SubmissionStatus};
use ubi_types::{Identity, Timestamp};

/// A registry stand-in returning scripted answers per identity.
///
/// Identities with no scripted answer read as not registered. Answers can
/// be flipped between engine calls, which is exactly how tests exercise the
/// "registration status is volatile external truth" behavior.
#[derive(Default)]
pub struct ScriptedRegistry {
    answers: Mutex<HashMap<Identity, bool>>,
}

impl ScriptedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the registration answer for an identity.
    pub fn set_registered(&self, identity: &Identity, registered: bool) {
        self.answers
            .lock()
            .unwrap()
            .insert(identity.clone(), registered);
    }
}

impl HumanityRegistry for ScriptedRegistry {
    fn is_registered(&self, identity: &Identity) -> bool {
        self.answers
            .lock()
            .unwrap()
            .get(identity)
            .copied()
            .unwrap_or(false)
    }

    fn submission_info(&self, identity: &Identity) -> Option<SubmissionInfo> {
        let registered = self.is_registered(identity);
        Some(SubmissionInfo {
            status: SubmissionStatus::None,
            submission_time: Timestamp::EPOCH,
            registered,
            has_vouched: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_identities_read_as_unregistered() {
        let registry = ScriptedRegistry::new();
        let alice = Identity::new("ubi_alice");
        assert!(!registry.is_registered(&alice));
    }

    #[test]
    fn answers_can_flip_between_calls() {
        let registry = ScriptedRegistry::new();
        let alice = Identity::new("ubi_alice");
        registry.set_registered(&alice, true);
        assert!(registry.is_registered(&alice));
        registry.set_registered(&alice, false);
        assert!(!registry.is_registered(&alice));
    }
}
