//! Move verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a proposed word was not played.
///
/// `Display` yields the stable reason string used in logs and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveRejection {
    /// The oracle gave nothing usable: failed call, or no alphabetic token.
    NoSuggestion,
    /// Not exactly one letter away from the current word.
    NotANeighbor,
    /// Not a dictionary word.
    NotInDictionary,
    /// Already on the ladder.
    AlreadyVisited,
}

impl MoveRejection {
    /// Stable reason string.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            MoveRejection::NoSuggestion => "no-suggestion",
            MoveRejection::NotANeighbor => "not-a-neighbor",
            MoveRejection::NotInDictionary => "not-in-dictionary",
            MoveRejection::AlreadyVisited => "already-visited",
        }
    }
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for MoveRejection {}

/// Outcome of a single attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "status", content = "reason")]
pub enum Verdict {
    /// The word was played.
    Accepted,
    /// The word was not played; history is unchanged.
    Rejected(MoveRejection),
}

impl Verdict {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl From<Result<(), MoveRejection>> for Verdict {
    fn from(result: Result<(), MoveRejection>) -> Self {
        match result {
            Ok(()) => Verdict::Accepted,
            Err(rejection) => Verdict::Rejected(rejection),
        }
    }
}
