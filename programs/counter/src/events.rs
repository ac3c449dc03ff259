//! Events module for the Counter program
//!
//! Structured events emitted alongside the human-readable log lines so that
//! off-chain indexers can follow counter activity.

use anchor_lang::prelude::*;

/// Event emitted when a counter account is created
#[event]
pub struct CounterInitialized {
    /// The newly created counter account
    pub counter: Pubkey,
    /// The signer who paid for the account
    pub payer: Pubkey,
    /// The count after initialization (always 0)
    pub count: u64,
}

/// Event emitted when a counter is incremented
#[event]
pub struct CounterIncremented {
    /// The counter account that was incremented
    pub counter: Pubkey,
    /// The value before incrementing
    pub previous_count: u64,
    /// The value after incrementing
    pub count: u64,
}
