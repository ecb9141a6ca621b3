//! Entry points of the NFT ledger.
//!
//! Mirrors the host-facing interface: a read entry point that re-encodes
//! query results as a single JSON value, and a write entry point whose only
//! observable effect is the persisted registry changes. Both decode the
//! incoming envelope into a typed request first, load a fresh state
//! snapshot, then run exactly one handler.

pub mod error;
pub mod request;

pub use error::InvokeError;
pub use request::{MutateRequest, QueryRequest, RequestEnvelope};

use deed_ledger::{mutate, query as handlers, LedgerError, LedgerState, Rejection};
use deed_store::DocumentStore;
use deed_types::CallContext;
use serde_json::Value;

/// Wrap a handler failure for the caller: business rules become structured
/// rejection payloads named after the method, store failures stay fatal.
fn reject(method: &str, err: LedgerError) -> InvokeError {
    match err {
        LedgerError::Storage(e) => InvokeError::Storage(e),
        other => InvokeError::Rejected(Rejection::new(method, other)),
    }
}

/// Read entry point. Never persists.
pub fn query<S: DocumentStore>(
    store: &S,
    envelope: &RequestEnvelope,
) -> Result<Value, InvokeError> {
    let request = QueryRequest::decode(envelope)?;
    let state = LedgerState::load(store)?;
    tracing::debug!(method = %envelope.method, "query");

    let method = envelope.method.as_str();
    let result = match request {
        QueryRequest::OwnerOf(p) => handlers::owner_of(&state, &p.token_id)
            .map(|owner| Value::from(owner.as_str())),
        QueryRequest::BalanceOf(p) => {
            handlers::balance_of(&state, &p.owner).map(Value::from)
        }
        QueryRequest::GetApproved(p) => handlers::get_approved(&state, &p.token_id)
            .map(|delegate| Value::from(delegate.as_str())),
        QueryRequest::IsApprovedForAll(p) => {
            handlers::is_approved_for_all(&state, &p.owner, &p.operator).map(Value::from)
        }
        QueryRequest::QueryTokens => Ok(Value::Array(
            handlers::query_tokens(&state)
                .iter()
                .map(|id| Value::from(id.as_str()))
                .collect(),
        )),
    };
    result.map_err(|err| reject(method, err))
}

/// Write entry point. `symbol` prefixes any token id minted by the call.
pub fn execute<S: DocumentStore>(
    store: &S,
    ctx: &CallContext,
    symbol: &str,
    envelope: &RequestEnvelope,
) -> Result<(), InvokeError> {
    let request = MutateRequest::decode(envelope)?;
    let mut state = LedgerState::load(store)?;
    tracing::debug!(method = %envelope.method, caller = %ctx.caller, "main");

    let method = envelope.method.as_str();
    let result = match request {
        MutateRequest::Mint(p) => {
            mutate::mint(store, &mut state, ctx, &p.to, symbol).map(|_| ())
        }
        MutateRequest::Approve(p) => {
            mutate::approve(store, &mut state, ctx, &p.to, &p.token_id)
        }
        MutateRequest::SetApprovalForAll(p) => {
            mutate::set_approval_for_all(store, &mut state, ctx, &p.operator, p.approved)
        }
        MutateRequest::TransferFrom(p) => {
            mutate::transfer_from(store, &mut state, ctx, &p.from, &p.to, &p.token_id)
        }
        MutateRequest::SafeTransferFrom(p) => mutate::safe_transfer_from(
            store,
            &mut state,
            ctx,
            &p.from,
            &p.to,
            &p.token_id,
            p.data.as_ref(),
        ),
    };
    result.map_err(|err| reject(method, err))
}
