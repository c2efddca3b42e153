//! Remote expression evaluation client
//!
//! Posts a raw expression string to an external service and reads back
//! either a numeric result or an error message. The interactive flow never
//! calls this; it exists for callers that want server-side evaluation, and
//! every failure is caught at this boundary and surfaced as an absent
//! result.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors from the remote evaluation boundary
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request could not be sent or the response body not read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service rejected the expression
    #[error("evaluation rejected: {0}")]
    Rejected(String),
    /// The response carried neither a result nor an error
    #[error("malformed response")]
    MalformedResponse,
}

#[derive(Debug, Serialize)]
struct EvalRequest<'a> {
    expression: &'a str,
}

#[derive(Debug, Deserialize)]
struct EvalResponse {
    result: Option<f64>,
    error: Option<String>,
}

/// Client for a remote `POST /calculate` style endpoint
#[derive(Debug, Clone)]
pub struct RemoteEvaluator {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteEvaluator {
    /// Creates a client for the given endpoint URL
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Evaluates an expression remotely, reporting failures in detail
    pub async fn try_evaluate(&self, expression: &str) -> Result<f64, RemoteError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&EvalRequest { expression })
            .send()
            .await?;
        let body: EvalResponse = response.json().await?;
        if let Some(error) = body.error {
            return Err(RemoteError::Rejected(error));
        }
        body.result.ok_or(RemoteError::MalformedResponse)
    }

    /// Evaluates an expression remotely; any failure becomes `None`
    pub async fn evaluate(&self, expression: &str) -> Option<f64> {
        match self.try_evaluate(expression).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%err, "remote evaluation failed");
                None
            }
        }
    }
}
