//! Neighbor rule and neighbor generation.
//!
//! Two words are neighbors when they have the same length and differ in
//! exactly one position. Generation is exhaustive: every single-letter
//! substitution of the word is looked up in the dictionary, so no neighbor
//! is ever missed and nothing outside the dictionary is ever produced.

use crate::core::{Dictionary, Word};

/// Are `a` and `b` exactly one substitution apart?
///
/// A word is never its own neighbor. Words of different length never are.
///
/// ```
/// use word_ladder::rules::is_neighbor;
///
/// assert!(is_neighbor("cold", "cord"));
/// assert!(!is_neighbor("cold", "cold"));
/// assert!(!is_neighbor("cold", "card"));
/// assert!(!is_neighbor("cold", "colds"));
/// ```
#[must_use]
pub fn is_neighbor(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }

    let mut differences = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }
    differences == 1
}

/// All dictionary words one substitution away from `word`.
///
/// Performs `word.len() * 25` lookups. The result has no duplicates, never
/// contains `word`, and is in position-then-letter order.
#[must_use]
pub fn neighbors(word: &Word, dictionary: &Dictionary) -> Vec<Word> {
    let mut found = Vec::new();
    if word.len() != dictionary.word_len() {
        return found;
    }

    let mut buf = word.as_str().as_bytes().to_vec();
    for pos in 0..buf.len() {
        let original = buf[pos];
        for letter in b'a'..=b'z' {
            if letter == original {
                continue;
            }
            buf[pos] = letter;
            // ASCII in, ASCII out.
            if let Ok(candidate) = std::str::from_utf8(&buf) {
                if let Some(hit) = dictionary.get(candidate) {
                    found.push(hit.clone());
                }
            }
        }
        buf[pos] = original;
    }

    found
}
