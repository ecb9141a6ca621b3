//! Authorization guard — may a caller act on a given token?

use crate::error::LedgerError;
use crate::state::LedgerState;
use deed_types::{Address, TokenId};

/// Whether `caller` may transfer `token_id`.
///
/// True iff the caller is the token's owner, the single recorded delegate
/// for the token, or the owner's currently recorded approved operator.
/// Errors with `NotFound` if the token does not exist.
pub fn is_approved_or_owner(
    state: &LedgerState,
    caller: &Address,
    token_id: &TokenId,
) -> Result<bool, LedgerError> {
    let owner = state
        .owners
        .get(token_id)
        .ok_or_else(|| LedgerError::NotFound("operator query for nonexistent token.".into()))?;

    if caller == owner {
        return Ok(true);
    }
    if state.token_approvals.get(token_id) == Some(caller) {
        return Ok(true);
    }
    Ok(is_operator_for(state, owner, caller))
}

/// Whether `operator` is the currently recorded approved operator of `owner`.
///
/// One record per owner: an operator set earlier but since replaced does
/// not count, regardless of its flag at the time.
pub(crate) fn is_operator_for(state: &LedgerState, owner: &Address, operator: &Address) -> bool {
    matches!(
        state.operator_approvals.get(owner),
        Some(record) if record.operator == *operator && record.approved
    )
}
