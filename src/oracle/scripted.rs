//! Scripted oracle: replays a fixed list of replies.
//!
//! Used to drive the loop deterministically without a model. Each call
//! pops the next scripted step; once the script is empty the oracle either
//! repeats a fallback reply or fails with `OracleError::Exhausted`.

use std::collections::VecDeque;

use super::{Oracle, OracleError};

#[derive(Clone, Debug)]
enum Step {
    Reply(String),
    Fail(String),
}

/// Deterministic oracle for tests and dry runs.
#[derive(Clone, Debug, Default)]
pub struct ScriptedOracle {
    script: VecDeque<Step>,
    fallback: Option<String>,
    requests: Vec<String>,
}

impl ScriptedOracle {
    /// Oracle answering with `replies` in order.
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: replies.into_iter().map(|r| Step::Reply(r.into())).collect(),
            ..Self::default()
        }
    }

    /// Oracle that gives the same reply forever.
    pub fn repeating(reply: impl Into<String>) -> Self {
        Self {
            fallback: Some(reply.into()),
            ..Self::default()
        }
    }

    /// Append a reply to the script.
    #[must_use]
    pub fn then_reply(mut self, reply: impl Into<String>) -> Self {
        self.script.push_back(Step::Reply(reply.into()));
        self
    }

    /// Append a failed call to the script.
    #[must_use]
    pub fn then_fail(mut self, message: impl Into<String>) -> Self {
        self.script.push_back(Step::Fail(message.into()));
        self
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    /// Scripted steps not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Oracle for ScriptedOracle {
    fn generate(&mut self, request: &str) -> Result<String, OracleError> {
        self.requests.push(request.to_string());

        match self.script.pop_front() {
            Some(Step::Reply(reply)) => Ok(reply),
            Some(Step::Fail(message)) => Err(OracleError::Unavailable(message)),
            None => self.fallback.clone().ok_or(OracleError::Exhausted),
        }
    }
}
