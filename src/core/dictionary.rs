//! Fixed-length word dictionary.
//!
//! A `Dictionary` holds only words of one length `L`. Entries of any other
//! length are dropped at load time rather than stored and filtered later,
//! so every membership test is a single hash lookup.
//!
//! The dictionary is read-only once built and can be shared by reference
//! between any number of sessions.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;

use super::word::Word;
use crate::error::{LadderError, Result};

/// Set of valid words of a single length.
#[derive(Clone, Debug)]
pub struct Dictionary {
    word_len: usize,
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Create an empty dictionary for words of `word_len` letters.
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        assert!(word_len > 0, "Word length must be at least 1");

        Self {
            word_len,
            words: FxHashSet::default(),
        }
    }

    /// Build a dictionary from raw entries, keeping those of length `word_len`.
    pub fn from_words<I, S>(word_len: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new(word_len);
        for entry in entries {
            dictionary.insert(entry.as_ref());
        }
        dictionary
    }

    /// Read newline-delimited entries.
    ///
    /// Lines are trimmed and lowercased. Blank lines, lines that are not
    /// plain letters or not valid UTF-8, and lines of the wrong length are
    /// skipped. Only read failures are errors.
    pub fn from_reader<R: BufRead>(reader: R, word_len: usize) -> io::Result<Self> {
        let mut dictionary = Self::new(word_len);
        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            match std::str::from_utf8(&line) {
                Ok(text) => {
                    dictionary.insert(text);
                }
                Err(err) => {
                    tracing::debug!(line = index + 1, error = %err, "skipping non-UTF-8 dictionary line");
                }
            }
        }
        Ok(dictionary)
    }

    /// Load a dictionary file.
    pub fn load(path: impl AsRef<Path>, word_len: usize) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |source| LadderError::DictionaryIo {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let dictionary = Self::from_reader(BufReader::new(file), word_len).map_err(io_err)?;

        tracing::debug!(
            path = %path.display(),
            word_len,
            words = dictionary.len(),
            "dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Add one raw entry. Returns true if it was kept.
    pub fn insert(&mut self, raw: &str) -> bool {
        match Word::parse(raw) {
            Ok(word) if word.len() == self.word_len => self.words.insert(word),
            _ => false,
        }
    }

    /// Exact membership test. The query must already be lowercased.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Look up the stored entry equal to `word`.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.words.get(word)
    }

    /// Length every member shares.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over members in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
