//! NFT ledger state machine.
//!
//! Tracks which account owns which token, who may act on a token on an
//! owner's behalf, and enforces the invariants required for safe ownership
//! transfer and minting. State lives in six named documents in the host
//! store; every invocation loads a full snapshot, mutates it in memory, and
//! writes back exactly the registries it changed.
//!
//! The ledger is single-threaded and run-to-completion: cross-invocation
//! ordering and snapshot consistency are the host's responsibility, so no
//! locking happens here. Every handler validates its preconditions in full
//! before issuing the first persistent write.

pub mod auth;
pub mod error;
pub mod genesis;
pub mod mutate;
pub mod query;
pub mod rejection;
pub mod state;

pub use error::LedgerError;
pub use genesis::{init, LedgerConfig};
pub use rejection::{Rejection, REJECT_CODE};
pub use state::{doc, LedgerState, OperatorRecord};
