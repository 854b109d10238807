//! Playing a game: the bounded move loop and its report.

mod move_loop;

pub use move_loop::{AttemptRecord, LadderOutcome, LadderReport, LoopState, MoveLoop};
