//! Error types for ladder setup.
//!
//! Only failures that stop a session from starting live here. Problems
//! during play (bad oracle output, illegal moves) are not errors; they are
//! recorded as rejections and consume an attempt.

use std::path::PathBuf;

/// Fatal errors raised while loading a dictionary, a config, or a session.
#[derive(Debug, thiserror::Error)]
pub enum LadderError {
    /// A word contained something other than ASCII letters, or was empty.
    #[error("invalid word {0:?}: expected one or more ASCII letters")]
    InvalidWord(String),

    /// Start or target word is missing from the dictionary.
    #[error("invalid-start-or-target: {start:?} -> {target:?} not both in the {word_len}-letter dictionary")]
    InvalidStartOrTarget {
        start: String,
        target: String,
        word_len: usize,
    },

    /// The dictionary file could not be read.
    #[error("failed to read dictionary {path}: {source}")]
    DictionaryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for `LadderConfig`.
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LadderError>;
