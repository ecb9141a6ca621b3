//! LMDB document store backend.
//!
//! Persists ledger documents in a single named LMDB database (document key
//! → JSON payload) via the `heed` bindings. Used by the CLI; tests and the
//! dispatch layer stay on the in-memory store.

pub mod error;

pub use error::LmdbError;

use deed_store::{DocumentStore, StoreError};
use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;

/// Name of the LMDB database holding the ledger documents.
const DOCUMENTS_DB: &str = "documents";

/// Default LMDB map size. The ledger's documents are small; the token list
/// is the only one that grows without bound.
const DEFAULT_MAP_SIZE: usize = 256 * 1024 * 1024;

/// A [`DocumentStore`] over an LMDB environment on disk.
pub struct LmdbDocumentStore {
    env: Env,
    db: Database<Str, Str>,
}

impl LmdbDocumentStore {
    /// Open or create an LMDB environment at `path`.
    pub fn open(path: &Path) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(DEFAULT_MAP_SIZE)
                .max_dbs(1)
                .open(path)?
        };
        let mut wtxn = env.write_txn()?;
        let db = env.create_database(&mut wtxn, Some(DOCUMENTS_DB))?;
        wtxn.commit()?;
        tracing::debug!(path = %path.display(), "opened lmdb document store");
        Ok(Self { env, db })
    }
}

impl DocumentStore for LmdbDocumentStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let value = self.db.get(&rtxn, key).map_err(LmdbError::from)?;
        Ok(value.map(str::to_string))
    }

    fn store_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.db.put(&mut wtxn, key, value).map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        Ok(())
    }
}
