//! Mutation engine — the only code allowed to change ledger state.
//!
//! Every handler follows the same shape: validate all preconditions, apply
//! the in-memory mutation, then persist each registry it touched before
//! returning. Because validation fully precedes the first `persist_*` call,
//! a rejected operation leaves nothing behind in the store.

use crate::auth;
use crate::error::LedgerError;
use crate::state::{LedgerState, OperatorRecord};
use deed_store::DocumentStore;
use deed_types::{Address, CallContext, TokenId};

/// Mint the next token under `symbol` to `to`.
///
/// Only the minter may mint. The new id is `<symbol>.<n>` where `n` is the
/// current token count; the existence check on that id is defensive and
/// unreachable while ids are allocated sequentially.
pub fn mint<S: DocumentStore>(
    store: &S,
    state: &mut LedgerState,
    ctx: &CallContext,
    to: &Address,
    symbol: &str,
) -> Result<TokenId, LedgerError> {
    if to.is_empty() {
        return Err(LedgerError::InvalidInput("mint to the zero address.".into()));
    }
    let token_id = TokenId::new(symbol, state.tokens.len() as u64);
    if state.token_exists(&token_id) {
        return Err(LedgerError::Conflict("token already minted.".into()));
    }
    if ctx.caller != state.minter {
        return Err(LedgerError::Unauthorized("minter has no permission".into()));
    }

    *state.balances.entry(to.clone()).or_insert(0) += 1;
    state.owners.insert(token_id.clone(), to.clone());
    state.tokens.push(token_id.clone());

    state.persist_balances(store)?;
    state.persist_owners(store)?;
    state.persist_tokens(store)?;
    tracing::info!(token = %token_id, owner = %to, "minted token");
    Ok(token_id)
}

/// Approve `to` as the single delegate for `token_id`.
///
/// The caller must be the token's owner or the owner's approved operator,
/// and the delegate must not be the owner itself. Ownership is unchanged,
/// but the owner registry is rewritten alongside the approval.
pub fn approve<S: DocumentStore>(
    store: &S,
    state: &mut LedgerState,
    ctx: &CallContext,
    to: &Address,
    token_id: &TokenId,
) -> Result<(), LedgerError> {
    let owner = state
        .owners
        .get(token_id)
        .cloned()
        .ok_or_else(|| LedgerError::NotFound("owner query for nonexistent token.".into()))?;
    if *to == owner {
        return Err(LedgerError::InvalidInput("approval to current owner.".into()));
    }
    if ctx.caller != owner && !auth::is_operator_for(state, &owner, &ctx.caller) {
        return Err(LedgerError::Unauthorized(
            "approve caller is not owner nor approved for all.".into(),
        ));
    }

    state.token_approvals.insert(token_id.clone(), to.clone());

    state.persist_owners(store)?;
    state.persist_token_approvals(store)?;
    tracing::info!(token = %token_id, delegate = %to, "token approval set");
    Ok(())
}

/// Record `operator` with flag `approved` for the caller.
///
/// The caller's record is replaced wholesale: any different operator
/// approved earlier is implicitly revoked by this write.
pub fn set_approval_for_all<S: DocumentStore>(
    store: &S,
    state: &mut LedgerState,
    ctx: &CallContext,
    operator: &Address,
    approved: bool,
) -> Result<(), LedgerError> {
    if *operator == ctx.caller {
        return Err(LedgerError::InvalidInput("approve is caller.".into()));
    }

    state.operator_approvals.insert(
        ctx.caller.clone(),
        OperatorRecord {
            operator: operator.clone(),
            approved,
        },
    );

    state.persist_operator_approvals(store)?;
    tracing::info!(owner = %ctx.caller, operator = %operator, approved, "operator approval set");
    Ok(())
}

/// Transfer `token_id` from `from` to `to`.
///
/// The caller must pass the authorization guard, and `from` must be the
/// recorded owner. The token's delegate approval is NOT cleared by the
/// transfer: it stays in force for the new owner's token until explicitly
/// reset.
pub fn transfer_from<S: DocumentStore>(
    store: &S,
    state: &mut LedgerState,
    ctx: &CallContext,
    from: &Address,
    to: &Address,
    token_id: &TokenId,
) -> Result<(), LedgerError> {
    if to.is_empty() {
        return Err(LedgerError::InvalidInput(
            "transfer to the zero address.".into(),
        ));
    }
    if !auth::is_approved_or_owner(state, &ctx.caller, token_id)? {
        return Err(LedgerError::Unauthorized(
            "transfer caller is not owner nor approved.".into(),
        ));
    }
    if state.owners.get(token_id) != Some(from) {
        return Err(LedgerError::InvalidState(
            "transfer of token that is not own.".into(),
        ));
    }

    match state.balances.get_mut(from) {
        Some(count) if *count > 0 => *count -= 1,
        _ => {
            return Err(LedgerError::InvalidState(format!(
                "balance accounting underflow for {from}"
            )))
        }
    }
    *state.balances.entry(to.clone()).or_insert(0) += 1;
    state.owners.insert(token_id.clone(), to.clone());

    state.persist_balances(store)?;
    state.persist_owners(store)?;
    tracing::info!(token = %token_id, %from, %to, "token transferred");
    Ok(())
}

/// `transferFrom` plus an opaque data payload.
///
/// The payload is accepted for interface compatibility and ignored: no
/// receiver-capability check or callback is performed.
pub fn safe_transfer_from<S: DocumentStore>(
    store: &S,
    state: &mut LedgerState,
    ctx: &CallContext,
    from: &Address,
    to: &Address,
    token_id: &TokenId,
    _data: Option<&serde_json::Value>,
) -> Result<(), LedgerError> {
    transfer_from(store, state, ctx, from, to, token_id)
}
