//! HTTP oracle for Ollama-style `POST /api/generate` endpoints.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{Oracle, OracleError};
use crate::core::OracleConfig;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Blocking client for a single model on a generate endpoint.
#[derive(Clone, Debug)]
pub struct OllamaOracle {
    client: Client,
    config: OracleConfig,
}

impl OllamaOracle {
    /// Build a client with the configured request timeout.
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    fn classify(&self, err: reqwest::Error) -> OracleError {
        if err.is_timeout() {
            OracleError::Timeout(self.config.timeout())
        } else if let Some(status) = err.status() {
            OracleError::Status(status.as_u16())
        } else {
            OracleError::Transport(err)
        }
    }
}

impl Oracle for OllamaOracle {
    fn generate(&mut self, request: &str) -> Result<String, OracleError> {
        let body = GenerateRequest {
            model: &self.config.model,
            prompt: request,
            stream: false,
        };

        let reply = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.json::<GenerateResponse>())
            .map_err(|err| self.classify(err))?;

        Ok(reply.response)
    }
}
