//! Session and oracle configuration.
//!
//! Everything a run needs is carried in `LadderConfig` and handed to the
//! loop at construction. Configs can be built in code with the `with_*`
//! setters or read from TOML; missing TOML keys fall back to defaults.
//!
//! ```toml
//! dictionary_path = "words_alpha.txt"
//! start = "cold"
//! target = "warm"
//! max_attempts = 12
//!
//! [oracle]
//! model = "llama3"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};

/// Settings for the language-model oracle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Full generate endpoint, e.g. `http://localhost:11434/api/generate`.
    pub endpoint: String,

    /// Model identifier passed through to the endpoint.
    pub model: String,

    /// Per-request timeout. A timed-out call counts as an empty reply.
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            model: "deepseek-r1:latest".to_string(),
            timeout_secs: 120,
        }
    }
}

impl OracleConfig {
    /// Set the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration for one ladder run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Newline-delimited word list.
    pub dictionary_path: PathBuf,

    /// Start word.
    pub start: String,

    /// Target word.
    pub target: String,

    /// Oracle calls allowed before the game is lost.
    /// Rejected suggestions count against this budget.
    pub max_attempts: u32,

    /// Maximum candidate hints included in a request.
    pub hint_limit: usize,

    /// Include a sampled candidate list in each request.
    pub include_hints: bool,

    /// Remove typesetting and markup noise before extracting the answer.
    pub strip_noise: bool,

    /// Seed for hint sampling. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Oracle settings.
    pub oracle: OracleConfig,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("words_alpha.txt"),
            start: "cold".to_string(),
            target: "warm".to_string(),
            max_attempts: 5,
            hint_limit: 20,
            include_hints: true,
            strip_noise: true,
            seed: None,
            oracle: OracleConfig::default(),
        }
    }
}

impl LadderConfig {
    /// Create a config for a start/target pair with default settings.
    pub fn new(start: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LadderError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the dictionary path.
    #[must_use]
    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    /// Set the attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    /// Set the hint cap.
    #[must_use]
    pub fn with_hint_limit(mut self, limit: usize) -> Self {
        self.hint_limit = limit;
        self
    }

    /// Enable or disable candidate hints.
    #[must_use]
    pub fn with_hints(mut self, enabled: bool) -> Self {
        self.include_hints = enabled;
        self
    }

    /// Enable or disable noise stripping.
    #[must_use]
    pub fn with_noise_stripping(mut self, enabled: bool) -> Self {
        self.strip_noise = enabled;
        self
    }

    /// Fix the hint sampling seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the oracle settings.
    #[must_use]
    pub fn with_oracle(mut self, oracle: OracleConfig) -> Self {
        self.oracle = oracle;
        self
    }
}
