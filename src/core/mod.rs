//! Core types: words, the dictionary, RNG, configuration.
//!
//! Nothing here knows about ladders or oracles. The session and loop build
//! on these.

pub mod config;
pub mod dictionary;
pub mod rng;
pub mod word;

pub use config::{LadderConfig, OracleConfig};
pub use dictionary::Dictionary;
pub use rng::LadderRng;
pub use word::{is_word_text, Word};
