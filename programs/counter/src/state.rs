//! # State Module
//!
//! Account structures for the counter program.

use anchor_lang::prelude::*;

use crate::errors::CounterError;

/// The counter account
///
/// Stored on-chain as Anchor's 8-byte discriminator followed by `count`
/// as a little-endian u64.
#[account]
#[derive(InitSpace, Debug)]
pub struct Counter {
    /// The current count value
    pub count: u64,
}

impl Counter {
    /// Bytes to allocate for a counter account, discriminator included
    pub const SPACE: usize = 8 + Counter::INIT_SPACE;

    /// Reset a freshly allocated counter to zero
    pub fn initialize(&mut self) {
        self.count = 0;
    }

    /// Add one to the count and return the new value
    ///
    /// Fails with `CounterOverflow` at `u64::MAX`, leaving the count as is.
    pub fn increment(&mut self) -> Result<u64> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(CounterError::CounterOverflow)?;
        Ok(self.count)
    }
}
