//! # Counter Program
//!
//! A minimal counter program built with the Anchor framework. A signer pays
//! for and creates a counter account starting at zero; afterwards anyone can
//! increment it by one.
//!
//! The program holds no state of its own. Every instruction operates on the
//! `Counter` account passed in by the caller, and the runtime persists the
//! result.

// Suppress warnings from Anchor's internal behavior
#![allow(deprecated)]
#![allow(ambiguous_glob_reexports)]

use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod errors;
pub mod events;

pub use instructions::*;
pub use state::*;
pub use errors::*;
pub use events::*;

declare_id!("2LUoJnKc5maGZYcyqMcGk2WwdKwTygxwRP7uqBUu6h6y");

/// Main program module containing all instruction handlers
#[program]
pub mod counter {
    use super::*;

    /// Create a new counter account and set its value to 0
    ///
    /// The `user` signer pays the rent for the new account. Calling this on a
    /// counter that already exists is rejected during account validation.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Events
    /// * `CounterInitialized` - Emitted when the counter is created
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Increment the counter value by 1
    ///
    /// No signer is required: any caller may increment any counter.
    ///
    /// # Arguments
    /// * `ctx` - The instruction context containing accounts
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    ///
    /// # Errors
    /// * `CounterOverflow` - If the counter is already at `u64::MAX`
    ///
    /// # Events
    /// * `CounterIncremented` - Emitted with the previous and new values
    pub fn increment(ctx: Context<Increment>) -> Result<()> {
        instructions::increment(ctx)
    }
}
