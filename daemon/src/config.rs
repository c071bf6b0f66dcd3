//! Daemon configuration — TOML file as the base, CLI flags override.

use serde::Deserialize;
use ubi_types::{Identity, LedgerParams};

fn default_settle_interval() -> u64 {
    10
}

/// Configuration for a single-process UBI node.
#[derive(Clone, Debug, Deserialize)]
pub struct NodeConfig {
    /// Deployment parameters of the ledger.
    pub params: LedgerParams,

    /// Seconds between settlement sweeps.
    #[serde(default = "default_settle_interval")]
    pub settle_interval_secs: u64,

    /// Identities registered at boot (the daemon's local registry mirror).
    #[serde(default)]
    pub identities: Vec<String>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            params: LedgerParams::dev_defaults(Identity::new("ubi_governor")),
            settle_interval_secs: default_settle_interval(),
            identities: Vec::new(),
        }
    }
}
