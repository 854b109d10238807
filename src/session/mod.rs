//! Session state for one ladder game.

mod ladder;

pub use ladder::LadderSession;
