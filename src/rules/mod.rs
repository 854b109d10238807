//! Ladder rules.
//!
//! - `neighbor`: the one-letter-apart predicate and exhaustive neighbor generation
//! - `validation`: rejection reasons and per-attempt verdicts
//!
//! The session applies these rules; nothing here holds state.

pub mod neighbor;
pub mod validation;

pub use neighbor::{is_neighbor, neighbors};
pub use validation::{MoveRejection, Verdict};
