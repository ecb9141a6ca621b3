//! Invocation-level errors for the two entry points.

use deed_ledger::Rejection;
use deed_store::StoreError;

/// Failure of a single invocation.
///
/// Business-rule failures carry a structured [`Rejection`] payload; the
/// other variants are unstructured infrastructure failures that abort the
/// invocation without producing a payload.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// A handler rejected the request on a business rule.
    #[error("{0}")]
    Rejected(Rejection),
    /// The method name matched neither entry point's request set.
    #[error("[ {entry} ] unknown operation {method}")]
    UnknownMethod { entry: &'static str, method: String },
    /// The method was known but its params did not decode.
    #[error("malformed params for {method}: {source}")]
    Malformed {
        method: String,
        #[source]
        source: serde_json::Error,
    },
    /// The host store failed; nothing to report to the caller.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl InvokeError {
    /// The structured rejection payload, if this failure carries one.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}
