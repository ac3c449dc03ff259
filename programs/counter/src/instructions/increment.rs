//! Increment instruction for the Counter program

use anchor_lang::prelude::*;
use crate::state::Counter;
use crate::events::CounterIncremented;

/// Increment the counter value by 1
///
/// There is deliberately no signer here: whoever can name a counter
/// account can increment it.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * `CounterIncremented` - Emitted with the previous and new values
pub fn increment(ctx: Context<Increment>) -> Result<()> {
    let counter = &mut ctx.accounts.counter;
    let previous_count = counter.count;

    let count = counter.increment()?;

    emit!(CounterIncremented {
        counter: counter.key(),
        previous_count,
        count,
    });

    msg!("Counter incremented! Current count: {}", count);
    Ok(())
}

/// Account validation context for incrementing a counter
#[derive(Accounts)]
pub struct Increment<'info> {
    /// The counter to increment; must be owned by this program
    #[account(mut)]
    pub counter: Account<'info, Counter>,
}
