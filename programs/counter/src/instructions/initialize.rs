//! Initialize instruction for the Counter program

use anchor_lang::prelude::*;
use crate::state::Counter;
use crate::events::CounterInitialized;

/// Initialize a freshly created counter
///
/// By the time this runs, Anchor has verified that `user` signed, created
/// the `counter` account through the System Program with `user` paying rent,
/// and written the `Counter` discriminator.
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
    let counter = &mut ctx.accounts.counter;
    counter.initialize();

    emit!(CounterInitialized {
        counter: counter.key(),
        payer: ctx.accounts.user.key(),
        count: counter.count,
    });

    msg!("Counter initialized! Current count: {}", counter.count);
    Ok(())
}

/// Account validation context for creating a counter
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The counter account to be created
    ///
    /// Not a PDA, so its keypair must also sign the transaction. Fails if
    /// the account is already in use.
    #[account(
        init,
        payer = user,
        space = Counter::SPACE
    )]
    pub counter: Account<'info, Counter>,

    /// The signer who authorizes the creation and pays the rent
    #[account(mut)]
    pub user: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}
