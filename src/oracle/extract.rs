//! Pulling a single word out of free-form model output.
//!
//! This is a heuristic tuned to what chat models actually emit, pinned by
//! golden tests rather than derived from any grammar. The steps:
//!
//! 1. Optionally delete every substring in `NOISE_DENYLIST`.
//! 2. Lowercase.
//! 3. Take the text after the last `answer:`; failing that, after the last
//!    closing think tag; failing that, the last non-blank line.
//! 4. Trim. If whitespace remains, keep the first fragment and drop every
//!    non-letter in it. Otherwise only trim non-letters from the ends.
//!
//! The result may still be empty or contain non-letters; the caller treats
//! that as no suggestion.

/// Substrings removed before extraction, applied in order.
///
/// Longer LaTeX commands come before the single characters they contain.
pub const NOISE_DENYLIST: &[&str] = &[
    "\\boxed", "\\textbf", "\\text", "\\mathrm", "\\mathbf", "\\(", "\\)", "\\[", "\\]", "$", "{",
    "}", "[", "]", "*", "_", "`", "#",
];

const ANSWER_MARKER: &str = "answer:";

/// Closing reasoning tags, longest first.
const THINK_CLOSERS: &[&str] = &["</thinking>", "</think>"];

/// Remove every denylisted substring.
#[must_use]
pub fn strip_noise(raw: &str) -> String {
    NOISE_DENYLIST
        .iter()
        .fold(raw.to_string(), |text, noise| text.replace(noise, ""))
}

/// Extract the suggested word from a raw reply.
///
/// ```
/// use word_ladder::oracle::extract_word;
///
/// assert_eq!(extract_word("<thoughts>c to b</thoughts>\nAnswer: bold", true), "bold");
/// assert_eq!(extract_word("$\\boxed{\\text{zoom}}$", true), "zoom");
/// assert_eq!(extract_word("", true), "");
/// ```
#[must_use]
pub fn extract_word(raw: &str, strip: bool) -> String {
    let cleaned = if strip {
        strip_noise(raw)
    } else {
        raw.to_string()
    };
    let lowered = cleaned.to_lowercase();

    let tail = after_last(&lowered, &[ANSWER_MARKER])
        .or_else(|| after_last(&lowered, THINK_CLOSERS))
        .unwrap_or_else(|| last_non_blank_line(&lowered))
        .trim();

    if tail.contains(char::is_whitespace) {
        tail.split_whitespace()
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect()
    } else {
        // Single token: only the ends are trimmed, so "can't" stays invalid.
        tail.trim_matches(|c: char| !c.is_alphabetic()).to_string()
    }
}

/// Text after the last occurrence of the first marker found.
fn after_last<'a>(text: &'a str, markers: &[&str]) -> Option<&'a str> {
    markers
        .iter()
        .find_map(|marker| text.rfind(marker).map(|idx| &text[idx + marker.len()..]))
}

fn last_non_blank_line(text: &str) -> &str {
    text.lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default()
}
