//! Submission metadata mirroring what a Proof-of-Humanity registry tracks
//! per identity.

use serde::{Deserialize, Serialize};
use ubi_types::Timestamp;

/// Where an identity's submission stands in the registry's own workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// No pending action.
    None,
    /// Collecting vouches from registered humans.
    Vouching,
    /// Submission under review for registration.
    PendingRegistration,
    /// Registered identity under review for removal.
    PendingRemoval,
}

/// Per-identity submission metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionInfo {
    pub status: SubmissionStatus,
    /// When the submission was made.
    pub submission_time: Timestamp,
    /// Whether the identity is currently registered.
    pub registered: bool,
    /// Whether the identity has an outstanding vouch for another submission.
    pub has_vouched: bool,
}
