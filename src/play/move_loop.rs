//! The move loop: ask, extract, validate, advance, repeat.
//!
//! Each attempt:
//!
//! 1. Compute the unvisited neighbors of the current word and sample them
//!    down to the hint limit (if hints are enabled).
//! 2. Render a `MoveRequest` and send it to the oracle. A failed call
//!    becomes an empty reply.
//! 3. Extract one word from the reply.
//! 4. Validate it against the session. Accepted words are played;
//!    rejected words leave history untouched.
//!
//! Every attempt, accepted or not, consumes one unit of the budget, so the
//! loop makes at most `max_attempts` oracle calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{is_word_text, LadderConfig, LadderRng, Word};
use crate::oracle::{extract_word, MoveRequest, Oracle};
use crate::rules::{MoveRejection, Verdict};
use crate::session::LadderSession;

/// Where the loop stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Still playing; `attempts` have been used.
    Running { attempts: u32 },
    /// Target reached after `attempts` oracle calls.
    Won { attempts: u32 },
    /// Budget spent without reaching the target.
    Lost { attempts: u32 },
}

impl LoopState {
    /// Attempts consumed so far.
    #[must_use]
    pub fn attempts(self) -> u32 {
        match self {
            LoopState::Running { attempts }
            | LoopState::Won { attempts }
            | LoopState::Lost { attempts } => attempts,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, LoopState::Running { .. })
    }
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LadderOutcome {
    Won,
    Lost,
}

/// What happened during one attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 1-based attempt number.
    pub attempt: u32,
    /// Hints offered in the request.
    pub hints: Vec<Word>,
    /// Raw oracle reply; empty when the call failed.
    pub reply: String,
    /// Oracle failure message, if the call failed.
    pub oracle_error: Option<String>,
    /// Word extracted from the reply.
    pub suggestion: String,
    pub verdict: Verdict,
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderReport {
    pub outcome: LadderOutcome,
    pub attempts: u32,
    pub max_attempts: u32,
    pub start: Word,
    pub target: Word,
    pub history: Vec<Word>,
    /// Seed used for hint sampling.
    pub seed: u64,
    pub records: Vec<AttemptRecord>,
}

impl LadderReport {
    /// History joined with commas.
    #[must_use]
    pub fn history_line(&self) -> String {
        self.history
            .iter()
            .map(Word::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The final machine-readable status line.
    ///
    /// `GAME_WON attempt=<n> history=<w1,w2,...>` or the `GAME_LOST` form.
    #[must_use]
    pub fn status_line(&self) -> String {
        let tag = match self.outcome {
            LadderOutcome::Won => "GAME_WON",
            LadderOutcome::Lost => "GAME_LOST",
        };
        format!("{tag} attempt={} history={}", self.attempts, self.history_line())
    }
}

/// Drives one session against one oracle.
pub struct MoveLoop<'d, O: Oracle> {
    session: LadderSession<'d>,
    oracle: O,
    rng: LadderRng,
    max_attempts: u32,
    hint_limit: usize,
    include_hints: bool,
    strip_noise: bool,
    state: LoopState,
    records: Vec<AttemptRecord>,
}

impl<'d, O: Oracle> MoveLoop<'d, O> {
    /// Create a loop over an already-validated session.
    ///
    /// Reads only the play settings from `config`: `max_attempts`,
    /// `hint_limit`, `include_hints`, `strip_noise` and `seed` (a fresh seed
    /// if unset). Start, target, dictionary and oracle settings belong to the
    /// session and oracle passed in; a config naming different words logs a
    /// warning and the session's words are played.
    pub fn new(session: LadderSession<'d>, oracle: O, config: &LadderConfig) -> Self {
        if !session.start().as_str().eq_ignore_ascii_case(config.start.trim())
            || !session.target().as_str().eq_ignore_ascii_case(config.target.trim())
        {
            warn!(
                session_start = %session.start(),
                session_target = %session.target(),
                config_start = %config.start,
                config_target = %config.target,
                "config words differ from session; playing the session"
            );
        }

        let rng = config
            .seed
            .map_or_else(LadderRng::from_entropy, LadderRng::new);

        let state = if session.is_won() {
            LoopState::Won { attempts: 0 }
        } else if config.max_attempts == 0 {
            LoopState::Lost { attempts: 0 }
        } else {
            LoopState::Running { attempts: 0 }
        };

        Self {
            session,
            oracle,
            rng,
            max_attempts: config.max_attempts,
            hint_limit: config.hint_limit,
            include_hints: config.include_hints,
            strip_noise: config.strip_noise,
            state,
            records: Vec::new(),
        }
    }

    /// Replace the hint sampling RNG.
    #[must_use]
    pub fn with_rng(mut self, rng: LadderRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> &LadderSession<'d> {
        &self.session
    }

    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Seed used for hint sampling.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Attempts made so far.
    #[must_use]
    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    /// Hints for the next request: sampled unvisited neighbors.
    pub fn candidate_hints(&mut self) -> Vec<Word> {
        if !self.include_hints {
            return Vec::new();
        }
        let candidates = self.session.candidates();
        self.rng.sample(candidates, self.hint_limit)
    }

    /// Build the request for the next attempt.
    pub fn build_request(&mut self) -> MoveRequest {
        let hints = self.candidate_hints();
        MoveRequest {
            current: self.session.current().clone(),
            target: self.session.target().clone(),
            history: self.session.history().iter().cloned().collect(),
            word_len: self.session.word_len(),
            hints,
        }
    }

    /// Run one attempt and return the new state.
    ///
    /// Does nothing once the loop is terminal.
    pub fn step(&mut self) -> LoopState {
        let LoopState::Running { attempts } = self.state else {
            return self.state;
        };
        let attempt = attempts + 1;

        let request = self.build_request();
        let prompt = request.render();
        debug!(attempt, prompt = %prompt, "move request");

        let (reply, oracle_error) = match self.oracle.generate(&prompt) {
            Ok(reply) => (reply, None),
            Err(err) => {
                warn!(attempt, error = %err, "oracle call failed");
                (String::new(), Some(err.to_string()))
            }
        };
        info!(attempt, reply = %reply, "oracle reply");

        let suggestion = extract_word(&reply, self.strip_noise);
        let verdict = self.judge(&suggestion);

        match verdict {
            Verdict::Accepted => {
                info!(attempt, word = %suggestion, "move accepted");
            }
            Verdict::Rejected(reason) => {
                warn!(attempt, word = %suggestion, %reason, "move rejected");
            }
        }

        self.records.push(AttemptRecord {
            attempt,
            hints: request.hints,
            reply,
            oracle_error,
            suggestion,
            verdict,
        });

        self.state = if self.session.is_won() {
            info!(attempts = attempt, "target reached");
            LoopState::Won { attempts: attempt }
        } else if attempt >= self.max_attempts {
            info!(attempts = attempt, "attempt budget exhausted");
            LoopState::Lost { attempts: attempt }
        } else {
            LoopState::Running { attempts: attempt }
        };
        self.state
    }

    /// Validate and, if legal, play `suggestion`.
    fn judge(&mut self, suggestion: &str) -> Verdict {
        if !is_word_text(suggestion) {
            return Verdict::Rejected(MoveRejection::NoSuggestion);
        }
        let result = self
            .session
            .validate_move(suggestion)
            .and_then(|()| self.session.advance(suggestion).map(|_| ()));
        Verdict::from(result)
    }

    /// Play until won or out of attempts.
    pub fn run(mut self) -> LadderReport {
        while !self.step().is_terminal() {}
        self.into_report()
    }

    /// Summarize the game so far.
    ///
    /// A loop that is still running reports as lost.
    #[must_use]
    pub fn into_report(self) -> LadderReport {
        let outcome = match self.state {
            LoopState::Won { .. } => LadderOutcome::Won,
            LoopState::Running { .. } | LoopState::Lost { .. } => LadderOutcome::Lost,
        };

        LadderReport {
            outcome,
            attempts: self.state.attempts(),
            max_attempts: self.max_attempts,
            start: self.session.start().clone(),
            target: self.session.target().clone(),
            history: self.session.history().iter().cloned().collect(),
            seed: self.rng.seed(),
            records: self.records,
        }
    }
}
