//! Ledger state — the five registries plus the token list and minter.
//!
//! The full state is loaded once per invocation from the document store and
//! passed into handlers by reference; nothing is global. Each `persist_*`
//! method writes back exactly one registry, so a handler commits precisely
//! the documents it changed.

use deed_store::{DocumentStore, StoreError};
use deed_types::{Address, TokenId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of the persisted documents in the host store.
pub mod doc {
    pub const MINTER: &str = "minter";
    pub const TOKENS: &str = "tokens";
    pub const OWNERS: &str = "owners";
    pub const BALANCES: &str = "balances";
    pub const TOKEN_APPROVALS: &str = "tokenApprovals";
    pub const OPERATOR_APPROVALS: &str = "operatorApprovals";
}

/// An owner's operator approval record.
///
/// Holds only the most recently set operator and its flag; setting a new
/// operator replaces the record wholesale, implicitly revoking any operator
/// approved before.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRecord {
    pub operator: Address,
    pub approved: bool,
}

/// In-memory snapshot of the complete ledger state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    /// The single address authorized to mint. Set at genesis, never rotated.
    pub minter: Address,
    /// TokenId → owner. Presence here is what "minted" means.
    pub owners: BTreeMap<TokenId, Address>,
    /// Owner → count of tokens currently owned.
    pub balances: BTreeMap<Address, u64>,
    /// TokenId → the one delegate allowed to transfer it.
    pub token_approvals: BTreeMap<TokenId, Address>,
    /// Owner → single operator approval record.
    pub operator_approvals: BTreeMap<Address, OperatorRecord>,
    /// All token ids in mint order. Append-only; defines the next mint index.
    pub tokens: Vec<TokenId>,
}

impl LedgerState {
    /// Load the current snapshot of every registry from the store.
    ///
    /// Documents that have never been written load as empty; an absent
    /// minter document loads as the empty address, which no caller can
    /// match, so minting is impossible before genesis.
    pub fn load<S: DocumentStore>(store: &S) -> Result<Self, StoreError> {
        Ok(Self {
            minter: store.load_doc(doc::MINTER)?.unwrap_or_default(),
            owners: store.load_doc(doc::OWNERS)?.unwrap_or_default(),
            balances: store.load_doc(doc::BALANCES)?.unwrap_or_default(),
            token_approvals: store.load_doc(doc::TOKEN_APPROVALS)?.unwrap_or_default(),
            operator_approvals: store.load_doc(doc::OPERATOR_APPROVALS)?.unwrap_or_default(),
            tokens: store.load_doc(doc::TOKENS)?.unwrap_or_default(),
        })
    }

    pub fn persist_owners<S: DocumentStore>(&self, store: &S) -> Result<(), StoreError> {
        store.store_doc(doc::OWNERS, &self.owners)
    }

    pub fn persist_balances<S: DocumentStore>(&self, store: &S) -> Result<(), StoreError> {
        store.store_doc(doc::BALANCES, &self.balances)
    }

    pub fn persist_token_approvals<S: DocumentStore>(&self, store: &S) -> Result<(), StoreError> {
        store.store_doc(doc::TOKEN_APPROVALS, &self.token_approvals)
    }

    pub fn persist_operator_approvals<S: DocumentStore>(
        &self,
        store: &S,
    ) -> Result<(), StoreError> {
        store.store_doc(doc::OPERATOR_APPROVALS, &self.operator_approvals)
    }

    pub fn persist_tokens<S: DocumentStore>(&self, store: &S) -> Result<(), StoreError> {
        store.store_doc(doc::TOKENS, &self.tokens)
    }

    /// Whether a token id has been minted.
    pub fn token_exists(&self, token_id: &TokenId) -> bool {
        self.owners.contains_key(token_id)
    }
}
