//! Deployment parameters for the UBI ledger.

use crate::Identity;
use serde::{Deserialize, Serialize};

/// Parameters fixed at deployment of the ledger.
///
/// Modelled as an explicitly constructed configuration object handed to the
/// engine and ledger at genesis, not ambient global state. The accrual rate
/// here is only the *initial* value; the governor can change it afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerParams {
    /// Human-readable token name (e.g. "Democracy Earth").
    pub token_name: String,

    /// Token ticker symbol (e.g. "UBI").
    pub token_symbol: String,

    /// Supply credited to the deployer at genesis, in raw units.
    pub initial_supply: u128,

    /// Initial accrual rate, in raw units per second.
    pub accrued_per_second: u128,

    /// The single identity authorized to change the accrual rate.
    pub governor: Identity,
}

impl LedgerParams {
    /// Convenience defaults for local development and tests.
    pub fn dev_defaults(governor: Identity) -> Self {
        Self {
            token_name: "Democracy Earth".into(),
            token_symbol: "UBI".into(),
            initial_supply: 10_000_000,
            accrued_per_second: 1000,
            governor,
        }
    }
}
