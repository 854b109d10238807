//! Move requests and their prompt text.

use serde::{Deserialize, Serialize};

use crate::core::Word;

/// Everything the oracle is told about the game for one attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub current: Word,
    pub target: Word,
    /// Words played so far, start word first.
    pub history: Vec<Word>,
    pub word_len: usize,
    /// Sampled legal moves. Empty when hints are disabled or none exist.
    pub hints: Vec<Word>,
}

impl MoveRequest {
    /// History joined with `", "`.
    #[must_use]
    pub fn history_line(&self) -> String {
        join(&self.history)
    }

    /// Hints joined with `", "`.
    #[must_use]
    pub fn hints_line(&self) -> String {
        join(&self.hints)
    }

    /// Render the prompt sent to the model.
    #[must_use]
    pub fn render(&self) -> String {
        let current = &self.current;
        let target = &self.target;
        let word_len = self.word_len;
        let history = self.history_line();

        let mut prompt = format!(
            "You are playing a word ladder game.\n\
             The current word is \"{current}\".\n\
             The target word is \"{target}\".\n\
             The words used so far are: {history}.\n"
        );
        if !self.hints.is_empty() {
            prompt.push_str(&format!(
                "Some valid next words are: {}.\n",
                self.hints_line()
            ));
        }
        prompt.push_str(&format!(
            "Suggest the next valid English word in the ladder.\n\
             Rules:\n\
             1. The word must be a real English word.\n\
             2. It must have the same length as \"{current}\" ({word_len} letters).\n\
             3. It must differ from \"{current}\" by exactly one letter.\n\
             4. It should move closer to the target word \"{target}\".\n\
             5. It must not be a word already used.\n\
             6. Do not use LaTeX or markup such as $\\boxed{{\\text{{word}}}}$.\n\
             \n\
             Briefly think about the choice, then give the word.\n\
             Format:\n\
             <thoughts>your reasoning</thoughts>\n\
             Answer: <word>\n"
        ));
        prompt
    }
}

fn join(words: &[Word]) -> String {
    words.iter().map(Word::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    fn request(hints: &[&str]) -> MoveRequest {
        MoveRequest {
            current: Word::parse("cord").unwrap(),
            target: Word::parse("warm").unwrap(),
            history: words(&["cold", "cord"]),
            word_len: 4,
            hints: words(hints),
        }
    }

    #[test]
    fn test_lines() {
        let req = request(&["card", "word"]);
        assert_eq!(req.history_line(), "cold, cord");
        assert_eq!(req.hints_line(), "card, word");
    }

    #[test]
    fn test_render_with_hints() {
        let prompt = request(&["card", "word"]).render();

        assert!(prompt.contains("The current word is \"cord\"."));
        assert!(prompt.contains("The target word is \"warm\"."));
        assert!(prompt.contains("The words used so far are: cold, cord."));
        assert!(prompt.contains("Some valid next words are: card, word."));
        assert!(prompt.contains("(4 letters)"));
        assert!(prompt.contains("$\\boxed{\\text{word}}$"));
        assert!(prompt.trim_end().ends_with("Answer: <word>"));
    }

    #[test]
    fn test_render_without_hints() {
        let prompt = request(&[]).render();
        assert!(!prompt.contains("Some valid next words"));
    }
}
