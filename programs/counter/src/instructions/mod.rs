//! Instructions module for the Counter program
//!
//! Each instruction lives in its own file together with its account
//! validation context.

pub mod initialize;
pub mod increment;

pub use initialize::*;
pub use increment::*;
