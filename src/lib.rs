//! # word-ladder
//!
//! An oracle-guided word ladder engine.
//!
//! A ladder turns a start word into a target word one letter at a time,
//! every step a dictionary word. Moves are suggested by an external oracle
//! (normally a language model) and this crate decides whether to play them.
//!
//! ## Design Principles
//!
//! 1. **Legality is local**: the neighbor rule, dictionary membership and
//!    the no-revisit rule are checked on every suggestion. History only ever
//!    holds a valid simple path.
//!
//! 2. **Bounded**: every oracle call costs one attempt whether or not its
//!    suggestion is played, so a game always ends.
//!
//! 3. **Injected oracle**: the loop depends on the `Oracle` trait only.
//!    Tests drive it with `ScriptedOracle`; the binary uses `OllamaOracle`.
//!
//! This is not a solver. There is no search and no shortest-path guarantee.
//!
//! ## Modules
//!
//! - `core`: `Word`, `Dictionary`, `LadderRng`, configuration
//! - `rules`: neighbor rule, neighbor generation, rejection reasons
//! - `session`: `LadderSession` (current, target, history)
//! - `oracle`: `Oracle` trait, requests, reply extraction, implementations
//! - `play`: `MoveLoop` and its `LadderReport`
//!
//! ## Example
//!
//! ```
//! use word_ladder::{Dictionary, LadderConfig, LadderOutcome, LadderSession, MoveLoop, ScriptedOracle};
//!
//! let dict = Dictionary::from_words(4, ["cold", "cord", "card", "ward", "warm"]);
//! let session = LadderSession::new(&dict, "cold", "warm").unwrap();
//! let oracle = ScriptedOracle::new(["Answer: cord", "Answer: card", "Answer: ward", "Answer: warm"]);
//!
//! let config = LadderConfig::new("cold", "warm").with_max_attempts(10).with_seed(7);
//! let report = MoveLoop::new(session, oracle, &config).run();
//!
//! assert_eq!(report.outcome, LadderOutcome::Won);
//! assert_eq!(report.status_line(), "GAME_WON attempt=4 history=cold,cord,card,ward,warm");
//! ```

pub mod core;
pub mod error;
pub mod oracle;
pub mod play;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Dictionary, LadderConfig, LadderRng, OracleConfig, Word};

pub use crate::error::{LadderError, Result};

pub use crate::rules::{is_neighbor, neighbors, MoveRejection, Verdict};

pub use crate::session::LadderSession;

pub use crate::oracle::{
    extract_word, strip_noise, MoveRequest, OllamaOracle, Oracle, OracleError, ScriptedOracle,
};

pub use crate::play::{AttemptRecord, LadderOutcome, LadderReport, LoopState, MoveLoop};
