//! Abstract document storage for the deed NFT ledger.
//!
//! The host chain exposes a durable key-value store of named documents.
//! Every backend (LMDB, in-memory for testing) implements [`DocumentStore`];
//! the rest of the workspace depends only on the trait.
//!
//! A registry mutated in memory during an invocation is not observable to
//! future invocations until [`DocumentStore::store_doc`] runs for its key —
//! there is no implicit commit at the end of a call. Storage failures are
//! fatal for the invocation: no retry happens at this layer.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Durable store of named JSON documents.
pub trait DocumentStore {
    /// Read the raw payload stored under `key`, if any.
    fn load_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Durably commit `value` under `key`, replacing any previous payload.
    fn store_raw(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Load and decode the document stored under `key`.
    ///
    /// An absent document is `Ok(None)`; a present but undecodable one is
    /// corruption, not absence.
    fn load_doc<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.load_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Corruption(format!("document `{key}`: {e}"))),
            None => Ok(None),
        }
    }

    /// Encode `value` and durably commit it under `key`, logging the write.
    fn store_doc<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StoreError::Serialization(format!("document `{key}`: {e}")))?;
        self.store_raw(key, &raw)?;
        tracing::debug!(key, bytes = raw.len(), "stored document");
        Ok(())
    }
}
