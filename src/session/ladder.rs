//! Ladder session: current word, target word, and the path walked so far.
//!
//! ## Invariants
//!
//! - `history` starts with the start word and only ever grows at the end
//! - `current` is always the last entry of `history`
//! - `history` holds no duplicates
//! - start and target are dictionary members, checked once in `new`
//!
//! History uses `im` persistent structures so snapshots of a session are
//! O(1) to clone.

use im::{HashSet as ImHashSet, Vector};

use crate::core::{Dictionary, Word};
use crate::error::{LadderError, Result};
use crate::rules::{is_neighbor, neighbors, MoveRejection};

/// A single word-ladder game against one dictionary.
#[derive(Clone, Debug)]
pub struct LadderSession<'d> {
    dictionary: &'d Dictionary,
    current: Word,
    target: Word,
    history: Vector<Word>,
    visited: ImHashSet<Word>,
}

impl<'d> LadderSession<'d> {
    /// Start a session.
    ///
    /// Fails with `InvalidStartOrTarget` if either word is not in the
    /// dictionary (which also covers a length mismatch).
    pub fn new(dictionary: &'d Dictionary, start: &str, target: &str) -> Result<Self> {
        let invalid = || LadderError::InvalidStartOrTarget {
            start: start.to_string(),
            target: target.to_string(),
            word_len: dictionary.word_len(),
        };

        let start_word = Word::parse(start)
            .ok()
            .and_then(|w| dictionary.get(w.as_str()).cloned())
            .ok_or_else(invalid)?;
        let target_word = Word::parse(target)
            .ok()
            .and_then(|w| dictionary.get(w.as_str()).cloned())
            .ok_or_else(invalid)?;

        let mut history = Vector::new();
        history.push_back(start_word.clone());
        let mut visited = ImHashSet::new();
        visited.insert(start_word.clone());

        Ok(Self {
            dictionary,
            current: start_word,
            target: target_word,
            history,
            visited,
        })
    }

    /// First word of the ladder.
    #[must_use]
    pub fn start(&self) -> &Word {
        &self.history[0]
    }

    /// Word the next move must be a neighbor of.
    #[must_use]
    pub fn current(&self) -> &Word {
        &self.current
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Words played so far, start word first.
    #[must_use]
    pub fn history(&self) -> &Vector<Word> {
        &self.history
    }

    /// Dictionary this session validates against.
    #[must_use]
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Length shared by every word in this session.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.dictionary.word_len()
    }

    /// Has `word` already been played?
    #[must_use]
    pub fn has_visited(&self, word: &str) -> bool {
        self.visited.contains(word)
    }

    /// Has the current word reached the target?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.current == self.target
    }

    /// Check a proposed word without changing anything.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// neighbor of current, dictionary member, not yet visited.
    pub fn validate_move(&self, proposed: &str) -> std::result::Result<(), MoveRejection> {
        if !is_neighbor(proposed, self.current.as_str()) {
            return Err(MoveRejection::NotANeighbor);
        }
        if !self.dictionary.contains(proposed) {
            return Err(MoveRejection::NotInDictionary);
        }
        if self.has_visited(proposed) {
            return Err(MoveRejection::AlreadyVisited);
        }
        Ok(())
    }

    /// Play a move.
    ///
    /// Re-validates first, so an illegal word never reaches history.
    /// Returns the new current word.
    pub fn advance(&mut self, proposed: &str) -> std::result::Result<&Word, MoveRejection> {
        self.validate_move(proposed)?;
        let word = self
            .dictionary
            .get(proposed)
            .cloned()
            .ok_or(MoveRejection::NotInDictionary)?;

        self.history.push_back(word.clone());
        self.visited.insert(word.clone());
        self.current = word;
        Ok(&self.current)
    }

    /// Dictionary neighbors of the current word not yet visited.
    ///
    /// Recomputed on every call; the result shrinks as history grows.
    #[must_use]
    pub fn candidates(&self) -> Vec<Word> {
        neighbors(&self.current, self.dictionary)
            .into_iter()
            .filter(|w| !self.visited.contains(w))
            .collect()
    }
}
