//! Accrual-specific errors.
//!
//! Every failure is a precondition violation reported to the caller; no
//! operation mutates state before its preconditions have all passed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccrualError {
    #[error("the caller is not the governor")]
    Unauthorized,

    #[error("identity {0} is not registered in the humanity registry")]
    NotRegistered(String),

    #[error("identity {0} is already accruing UBI")]
    AlreadyAccruing(String),

    #[error("identity {0} is not accruing UBI")]
    NotAccruing(String),

    #[error("identity {0} is still registered in the humanity registry")]
    StillRegistered(String),

    #[error("arithmetic overflow in accrual computation")]
    Overflow,

    #[error("ledger error: {0}")]
    Ledger(String),

    #[error("store error: {0}")]
    Store(String),
}
