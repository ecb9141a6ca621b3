use proptest::prelude::*;

use deed_ledger::{genesis, mutate, query, LedgerState};
use deed_store::{DocumentStore, MemoryStore};
use deed_types::{Address, CallContext, Timestamp, TokenId};

const SYMBOL: &str = "DEED";

#[derive(Clone, Debug)]
enum Op {
    Mint { to: usize },
    Approve { caller: usize, to: usize, token: usize },
    SetOperator { caller: usize, operator: usize, approved: bool },
    Transfer { caller: usize, from: usize, to: usize, token: usize },
}

fn account(index: usize) -> Address {
    Address::new(format!("acct{index}"))
}

fn ctx(caller: usize) -> CallContext {
    CallContext::new(account(caller), Timestamp::new(1_700_000_000))
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..6).prop_map(|to| Op::Mint { to }),
        (0usize..6, 0usize..6, 0usize..12)
            .prop_map(|(caller, to, token)| Op::Approve { caller, to, token }),
        (0usize..6, 0usize..6, any::<bool>())
            .prop_map(|(caller, operator, approved)| Op::SetOperator { caller, operator, approved }),
        (0usize..6, 0usize..6, 0usize..6, 0usize..12)
            .prop_map(|(caller, from, to, token)| Op::Transfer { caller, from, to, token }),
    ]
}

/// Apply one operation through the real handlers; rejections are fine, the
/// properties below only care about what the surviving state looks like.
fn apply(store: &MemoryStore, state: &mut LedgerState, op: &Op) {
    match op {
        Op::Mint { to } => {
            // Caller 0 is the genesis minter, so minting succeeds.
            let _ = mutate::mint(store, state, &ctx(0), &account(*to), SYMBOL);
        }
        Op::Approve { caller, to, token } => {
            let _ = mutate::approve(
                store,
                state,
                &ctx(*caller),
                &account(*to),
                &TokenId::new(SYMBOL, *token as u64),
            );
        }
        Op::SetOperator { caller, operator, approved } => {
            let _ = mutate::set_approval_for_all(
                store,
                state,
                &ctx(*caller),
                &account(*operator),
                *approved,
            );
        }
        Op::Transfer { caller, from, to, token } => {
            let _ = mutate::transfer_from(
                store,
                state,
                &ctx(*caller),
                &account(*from),
                &account(*to),
                &TokenId::new(SYMBOL, *token as u64),
            );
        }
    }
}

fn seeded_store() -> (MemoryStore, LedgerState) {
    let store = MemoryStore::new();
    let config = genesis::LedgerConfig {
        minter: account(0),
        symbol: SYMBOL.to_string(),
    };
    genesis::init(&store, &config).unwrap();
    let state = LedgerState::load(&store).unwrap();
    (store, state)
}

proptest! {
    /// Every balance equals the number of tokens the owner registry records
    /// for that address, whatever sequence of operations ran.
    #[test]
    fn balances_match_owner_counts(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let (store, mut state) = seeded_store();
        for op in &ops {
            apply(&store, &mut state, op);
        }

        for (owner, balance) in &state.balances {
            let owned = state.owners.values().filter(|o| *o == owner).count() as u64;
            prop_assert_eq!(*balance, owned, "balance drift for {}", owner);
        }
        // And no owner is missing a balance entry.
        for owner in state.owners.values() {
            prop_assert!(state.balances.contains_key(owner));
        }
    }

    /// Token ids are allocated sequentially, never duplicated, and every
    /// listed token has an owner.
    #[test]
    fn token_list_is_sequential_and_owned(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let (store, mut state) = seeded_store();
        for op in &ops {
            apply(&store, &mut state, op);
        }

        for (i, id) in state.tokens.iter().enumerate() {
            prop_assert_eq!(id, &TokenId::new(SYMBOL, i as u64));
            prop_assert!(state.owners.contains_key(id));
        }
        prop_assert_eq!(state.tokens.len(), state.owners.len());
    }

    /// The persisted documents always reflect the in-memory state: a fresh
    /// load after any sequence of operations reproduces it exactly.
    #[test]
    fn store_snapshot_matches_memory(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let (store, mut state) = seeded_store();
        for op in &ops {
            apply(&store, &mut state, op);
        }

        let reloaded = LedgerState::load(&store).unwrap();
        prop_assert_eq!(reloaded, state);
    }

    /// `owner_of` and `balance_of` agree with the registries they project.
    #[test]
    fn queries_project_the_registries(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let (store, mut state) = seeded_store();
        for op in &ops {
            apply(&store, &mut state, op);
        }

        for (id, owner) in &state.owners {
            prop_assert_eq!(&query::owner_of(&state, id).unwrap(), owner);
        }
        for (owner, balance) in &state.balances {
            prop_assert_eq!(query::balance_of(&state, owner).unwrap(), *balance);
        }
        prop_assert_eq!(query::query_tokens(&state), state.tokens.clone());
    }
}

#[test]
fn genesis_store_holds_exactly_six_documents() {
    let (store, _) = seeded_store();
    assert_eq!(store.len(), 6);
    for key in [
        "minter",
        "tokens",
        "owners",
        "balances",
        "tokenApprovals",
        "operatorApprovals",
    ] {
        assert!(store.load_raw(key).unwrap().is_some(), "missing document {key}");
    }
}
