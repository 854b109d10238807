//! Oracle interface: the source of move suggestions.
//!
//! The move loop only needs "given text, produce text, fallibly". Anything
//! that can answer a prompt implements `Oracle`:
//!
//! - `OllamaOracle`: an Ollama-style `/api/generate` endpoint over HTTP
//! - `ScriptedOracle`: a fixed reply sequence for tests and dry runs
//!
//! Errors never stop a game. The loop turns any `OracleError` into an empty
//! reply, which is rejected and consumes one attempt.

pub mod extract;
pub mod ollama;
pub mod request;
pub mod scripted;

use std::time::Duration;

pub use extract::{extract_word, strip_noise, NOISE_DENYLIST};
pub use ollama::OllamaOracle;
pub use request::MoveRequest;
pub use scripted::ScriptedOracle;

/// Failure to obtain a reply.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// The request did not complete within the configured timeout.
    #[error("oracle timed out after {0:?}")]
    Timeout(Duration),

    /// The endpoint answered with a non-success status.
    #[error("oracle returned HTTP {0}")]
    Status(u16),

    /// Connection, body, or decoding failure.
    #[error("oracle request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A scripted oracle ran out of replies.
    #[error("scripted oracle has no replies left")]
    Exhausted,

    /// Any other failure reported by an oracle implementation.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
}

/// Something that answers a prompt with free-form text.
pub trait Oracle {
    /// Produce a reply to `request`.
    fn generate(&mut self, request: &str) -> Result<String, OracleError>;
}

impl<O: Oracle + ?Sized> Oracle for &mut O {
    fn generate(&mut self, request: &str) -> Result<String, OracleError> {
        (**self).generate(request)
    }
}

impl<O: Oracle + ?Sized> Oracle for Box<O> {
    fn generate(&mut self, request: &str) -> Result<String, OracleError> {
        (**self).generate(request)
    }
}
