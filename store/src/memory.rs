//! In-memory document store for testing.

use crate::{DocumentStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;

/// A thread-safe in-memory [`DocumentStore`].
///
/// Used by unit and dispatch tests in place of the host's durable store.
/// Writes become visible to subsequent loads immediately, which matches the
/// host contract as observed between invocations.
pub struct MemoryStore {
    docs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(HashMap::new()),
        }
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.lock().unwrap().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.docs.lock().unwrap().get(key).cloned())
    }

    fn store_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.docs
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
