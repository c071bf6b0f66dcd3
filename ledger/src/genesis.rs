//! Genesis construction for the balance ledger.

use crate::balances::BalanceLedger;
use crate::error::LedgerError;
use ubi_types::{Identity, LedgerParams, UbiAmount};

/// Build the ledger as it stands at deployment: the initial supply credited
/// to the deployer, nothing else.
pub fn create_genesis_ledger(
    params: &LedgerParams,
    deployer: &Identity,
) -> Result<BalanceLedger, LedgerError> {
    let mut ledger = BalanceLedger::new();
    ledger.credit(deployer, UbiAmount::new(params.initial_supply))?;
    Ok(ledger)
}
