//! Errors module for the Counter program
//!
//! Authorization and account-shape failures (missing signer, wrong owner,
//! wrong discriminator, account already in use) are raised by Anchor's
//! account validation before any handler runs. This module only holds the
//! errors the handlers themselves can produce.

use anchor_lang::prelude::*;

/// Custom error codes for the Counter program
#[error_code]
pub enum CounterError {
    /// The counter is already at `u64::MAX` and cannot be incremented
    ///
    /// The instruction fails and the stored count is left unchanged.
    #[msg("Counter overflow: count is already at u64::MAX")]
    CounterOverflow,
}
