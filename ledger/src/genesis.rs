//! Ledger genesis — the one-time initialization that seeds the state.

use crate::state::{doc, OperatorRecord};
use deed_store::{DocumentStore, StoreError};
use deed_types::{Address, TokenId};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Token symbol used when none is configured.
pub const DEFAULT_SYMBOL: &str = "DEED";

/// Minter address used by local development setups.
pub const DEV_MINTER: &str = "deed_dev_minter";

/// Static ledger configuration: the genesis minter and the token symbol
/// that prefixes every minted id.
#[derive(Clone, Debug, Deserialize)]
pub struct LedgerConfig {
    pub minter: Address,
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

fn default_symbol() -> String {
    DEFAULT_SYMBOL.to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            minter: Address::new(DEV_MINTER),
            symbol: default_symbol(),
        }
    }
}

/// Write genesis state: set the minter and empty every registry.
///
/// Not idempotence-guarded — running it against a populated store wipes all
/// existing ledger state, minted tokens included. Treat as a one-time
/// genesis action; a warning is logged if existing state is overwritten.
pub fn init<S: DocumentStore>(store: &S, config: &LedgerConfig) -> Result<(), StoreError> {
    if store.load_raw(doc::MINTER)?.is_some() {
        tracing::warn!("genesis over an existing ledger — all prior state is wiped");
    }
    store.store_doc(doc::MINTER, &config.minter)?;
    store.store_doc(doc::TOKENS, &Vec::<TokenId>::new())?;
    store.store_doc(doc::OWNERS, &BTreeMap::<TokenId, Address>::new())?;
    store.store_doc(doc::BALANCES, &BTreeMap::<Address, u64>::new())?;
    store.store_doc(doc::TOKEN_APPROVALS, &BTreeMap::<TokenId, Address>::new())?;
    store.store_doc(doc::OPERATOR_APPROVALS, &BTreeMap::<Address, OperatorRecord>::new())?;
    tracing::info!(minter = %config.minter, symbol = %config.symbol, "ledger genesis complete");
    Ok(())
}
