//! Per-invocation call context.

use crate::{Address, Timestamp};

/// Identity and chain state the host supplies for one invocation.
///
/// Constructed by whatever drives the dispatcher (test harness, CLI, host
/// binding) and passed through to the mutation handlers. Query handlers do
/// not take a context; reads are not authenticated.
#[derive(Clone, Debug)]
pub struct CallContext {
    /// The account that signed the invoking transaction.
    pub caller: Address,
    /// Timestamp of the block the invocation executes in.
    pub block_time: Timestamp,
}

impl CallContext {
    pub fn new(caller: Address, block_time: Timestamp) -> Self {
        Self { caller, block_time }
    }
}
