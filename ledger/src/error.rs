use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("arithmetic overflow in balance computation")]
    Overflow,

    #[error("store error: {0}")]
    Store(String),
}
