//! The `Word` type.
//!
//! A `Word` is a non-empty, lowercased run of ASCII letters. Restricting the
//! alphabet to `a..=z` keeps byte length equal to letter count, which the
//! neighbor rule and generator rely on.
//!
//! ```
//! use word_ladder::core::Word;
//!
//! let word = Word::parse("  Cold\n").unwrap();
//! assert_eq!(word.as_str(), "cold");
//! assert_eq!(word.len(), 4);
//!
//! assert!(Word::parse("can't").is_err());
//! assert!(Word::parse("").is_err());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};

/// A lowercased dictionary word.
///
/// Implements `Borrow<str>` so hash sets of words can be queried with `&str`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Trim, lowercase and validate raw text.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        if is_word_text(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(LadderError::InvalidWord(raw.to_string()))
        }
    }

    /// The word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed word; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// True when `text` is non-empty and made only of `a..=z`.
#[must_use]
pub fn is_word_text(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase())
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Word {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = LadderError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
