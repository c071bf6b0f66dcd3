use crate::SubmissionInfo;
use ubi_types::Identity;

/// The query surface the accrual engine needs from a humanity registry.
pub trait HumanityRegistry {
    /// Whether the identity is currently registered as a verified unique
    /// human.
    fn is_registered(&self, identity: &Identity) -> bool;

    /// Richer submission metadata, when the registry tracks it.
    ///
    /// The engine never looks beyond [`HumanityRegistry::is_registered`];
    /// this exists for callers that want to display registry state.
    fn submission_info(&self, _identity: &Identity) -> Option<SubmissionInfo> {
        None
    }
}
