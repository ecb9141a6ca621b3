use deed_store::StoreError;
use thiserror::Error;

/// Business-rule and infrastructure failures raised by ledger handlers.
///
/// Every variant except `Storage` is a rejected precondition: it aborts the
/// invocation before any registry write and surfaces to callers as a
/// structured rejection payload. `Storage` is fatal infrastructure failure
/// and bypasses the rejection convention.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
