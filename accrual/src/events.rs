//! Settlement events emitted by the engine.

use serde::{Deserialize, Serialize};
use ubi_types::{Identity, Timestamp, UbiAmount};

/// One entry in the append-only mint audit log.
///
/// Emitted on every successful settlement — both the self-loop mint and the
/// final settlement of a removal report. The amount may be zero: a
/// zero-elapsed settlement succeeds and is still observable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintedEvent {
    pub identity: Identity,
    pub amount: UbiAmount,
    pub at: Timestamp,
}
