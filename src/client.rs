//! Generation-endpoint collaborator.
//!
//! One request/response exchange: POST the user's instructions, decode the
//! report payload. The server runs the whole multi-agent job inside this
//! single call, so the response can take minutes; no client-side timeout
//! is applied.

use serde::Serialize;

use crate::report::ReportResult;

/// Failure taxonomy for one generation exchange.
///
/// `Service` carries the server's own failure message and is shown to the
/// user verbatim; the other variants are transport-level and surface a
/// derived message.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("{0}")]
    Service(String),

    /// The background task resolving the request went away without
    /// reporting an outcome.
    #[error("generation ended unexpectedly")]
    Interrupted,
}

/// Body of the generation request.
///
/// `userInstructions` is always present. The server treats an empty string
/// as "use the default sample template" and a missing field as a
/// validation error, so blank input must still serialize the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    #[serde(rename = "userInstructions")]
    user_instructions: String,
}

impl GenerateRequest {
    pub fn new(instructions: &str) -> Self {
        Self {
            user_instructions: instructions.trim().to_string(),
        }
    }

    pub fn user_instructions(&self) -> &str {
        &self.user_instructions
    }
}

/// HTTP client for the report-generation endpoint.
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ReportClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one generation exchange.
    ///
    /// An HTTP 200 whose body carries a non-empty `error` field is a
    /// domain failure, not a success.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<ReportResult, GenerateError> {
        tracing::debug!(endpoint = %self.endpoint, "sending generation request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let result: ReportResult = serde_json::from_slice(&body)?;

        if let Some(message) = result.service_error() {
            return Err(GenerateError::Service(message.to_string()));
        }

        Ok(result)
    }
}
