//! Read-only projections over the ledger state. Query handlers never persist.

use crate::error::LedgerError;
use crate::state::LedgerState;
use deed_types::{Address, TokenId};

/// Owner of a token. Errors with `NotFound` for a token that was never
/// minted — absence is a rejection, never an empty-string success.
pub fn owner_of(state: &LedgerState, token_id: &TokenId) -> Result<Address, LedgerError> {
    state
        .owners
        .get(token_id)
        .cloned()
        .ok_or_else(|| LedgerError::NotFound("owner query for nonexistent token.".into()))
}

/// Number of tokens currently owned by `owner`.
///
/// The zero address is invalid input; an address that has never held a
/// token has no balance entry and is rejected rather than defaulted to 0.
pub fn balance_of(state: &LedgerState, owner: &Address) -> Result<u64, LedgerError> {
    if owner.is_empty() {
        return Err(LedgerError::InvalidInput(
            "balance query for the zero address.".into(),
        ));
    }
    state
        .balances
        .get(owner)
        .copied()
        .ok_or_else(|| LedgerError::NotFound("balance query for unknown address.".into()))
}

/// The single delegate approved for a token, if any was ever recorded.
pub fn get_approved(state: &LedgerState, token_id: &TokenId) -> Result<Address, LedgerError> {
    if !state.token_exists(token_id) {
        return Err(LedgerError::NotFound(
            "approved query for nonexistent token.".into(),
        ));
    }
    state
        .token_approvals
        .get(token_id)
        .cloned()
        .ok_or_else(|| LedgerError::NotFound("approved query for nonexistent token.".into()))
}

/// Approval flag for `operator` acting on behalf of `owner`.
///
/// Strict existence semantics: both the owner's record and the queried
/// operator must match what is stored, otherwise the query is rejected
/// instead of answering `false`.
pub fn is_approved_for_all(
    state: &LedgerState,
    owner: &Address,
    operator: &Address,
) -> Result<bool, LedgerError> {
    let record = state
        .operator_approvals
        .get(owner)
        .ok_or_else(|| LedgerError::NotFound("owner query for nonexistent token.".into()))?;
    if record.operator != *operator {
        return Err(LedgerError::NotFound(
            "operator query for nonexistent token.".into(),
        ));
    }
    Ok(record.approved)
}

/// All minted token ids, in mint order. Never fails; unbounded size.
pub fn query_tokens(state: &LedgerState) -> Vec<TokenId> {
    state.tokens.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OperatorRecord;

    fn token(index: u64) -> TokenId {
        TokenId::new("DEED", index)
    }

    fn sample_state() -> LedgerState {
        let mut state = LedgerState::default();
        state.minter = Address::new("minty");
        for (i, owner) in ["alice", "alice", "bob"].iter().enumerate() {
            let id = token(i as u64);
            state.owners.insert(id.clone(), Address::new(*owner));
            *state.balances.entry(Address::new(*owner)).or_insert(0) += 1;
            state.tokens.push(id);
        }
        state
    }

    #[test]
    fn owner_of_returns_recorded_owner() {
        let state = sample_state();
        assert_eq!(owner_of(&state, &token(2)).unwrap(), Address::new("bob"));
    }

    #[test]
    fn owner_of_unknown_token_rejects() {
        let state = sample_state();
        let err = owner_of(&state, &token(9)).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
    }

    #[test]
    fn balance_of_counts_owned_tokens() {
        let state = sample_state();
        assert_eq!(balance_of(&state, &Address::new("alice")).unwrap(), 2);
        assert_eq!(balance_of(&state, &Address::new("bob")).unwrap(), 1);
    }

    #[test]
    fn balance_of_zero_address_is_invalid_input() {
        let state = sample_state();
        let err = balance_of(&state, &Address::new("")).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
    }

    #[test]
    fn balance_of_unseen_address_rejects() {
        let state = sample_state();
        let err = balance_of(&state, &Address::new("nobody")).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
    }

    #[test]
    fn get_approved_without_any_approval_rejects() {
        let state = sample_state();
        let err = get_approved(&state, &token(0)).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
    }

    #[test]
    fn get_approved_returns_recorded_delegate() {
        let mut state = sample_state();
        state.token_approvals.insert(token(0), Address::new("dave"));
        assert_eq!(get_approved(&state, &token(0)).unwrap(), Address::new("dave"));
    }

    #[test]
    fn get_approved_unknown_token_rejects() {
        let state = sample_state();
        let err = get_approved(&state, &token(9)).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
    }

    #[test]
    fn is_approved_for_all_is_strict_about_the_stored_operator() {
        let mut state = sample_state();
        state.operator_approvals.insert(
            Address::new("alice"),
            OperatorRecord {
                operator: Address::new("olive"),
                approved: true,
            },
        );
        assert!(is_approved_for_all(&state, &Address::new("alice"), &Address::new("olive")).unwrap());
        // A different operator than the stored record is a rejection, not `false`.
        let err = is_approved_for_all(&state, &Address::new("alice"), &Address::new("dave"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
        // No record at all for the owner is also a rejection.
        let err =
            is_approved_for_all(&state, &Address::new("bob"), &Address::new("olive")).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
    }

    #[test]
    fn query_tokens_lists_in_mint_order() {
        let state = sample_state();
        assert_eq!(query_tokens(&state), vec![token(0), token(1), token(2)]);
    }

    #[test]
    fn query_tokens_on_empty_ledger_is_empty_not_an_error() {
        let state = LedgerState::default();
        assert!(query_tokens(&state).is_empty());
    }
}
