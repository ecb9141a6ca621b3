//! Fundamental types for the deed NFT ledger.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: account addresses, token identifiers, timestamps, and the
//! per-invocation call context handed in by the host.

pub mod address;
pub mod context;
pub mod time;
pub mod token;

pub use address::Address;
pub use context::CallContext;
pub use time::Timestamp;
pub use token::TokenId;
