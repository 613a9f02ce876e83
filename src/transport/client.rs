//! HTTP client for the answering service.
//!
//! One query, one attempt, one answer: POST `/api/chat` with
//! `{"query": ...}`, expect `{"answer": ...}` back. No retry and no
//! client-side timeout - presenting a failure is the caller's job, this
//! module only makes sure the failure detail survives for logging.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Errors that can occur while talking to the answering service.
/// Variants carry the original failure detail so the caller can log or
/// classify it, even when the UI collapses them into one generic notice.
#[derive(Debug)]
pub enum TransportError {
    /// Network-level failure (DNS, connection refused, broken transfer).
    Network(String),
    /// The service answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The service answered 2xx but the body was not the expected JSON.
    Parse(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "network error: {msg}"),
            TransportError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            TransportError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Request body for `/api/chat`.
#[derive(Serialize, Debug)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Successful response body from `/api/chat`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Answer {
    pub answer: String,
}

/// The single call the session controller needs from the outside world.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Submits a query and waits for the answer. Exactly one attempt.
    async fn send_query(&self, query: &str) -> Result<Answer, TransportError>;
}

/// reqwest-backed client for the answering service.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the service rooted at `base_url`
    /// (e.g. `http://localhost:8000`, no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Probes the service root with a GET. Used at startup to surface
    /// reachability in the UI without blocking it.
    pub async fn check_status(&self) -> Result<(), TransportError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Api {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string()),
            });
        }

        info!("Answering service reachable at {}", self.base_url);
        Ok(())
    }
}

#[async_trait]
impl AnswerService for ApiClient {
    async fn send_query(&self, query: &str) -> Result<Answer, TransportError> {
        debug!("Sending query ({} bytes)", query.len());

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Answering service response status: {status}");

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Answering service error: {} - {}", status.as_u16(), message);
            return Err(TransportError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        serde_json::from_str::<Answer>(&body).map_err(|e| {
            warn!("Malformed answer body: {e}");
            TransportError::Parse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_serializes_to_expected_wire_shape() {
        let req = QueryRequest {
            query: "What are the symptoms of diabetes?",
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"query":"What are the symptoms of diabetes?"}"#
        );
    }

    #[test]
    fn test_answer_deserializes_from_wire_shape() {
        let answer: Answer =
            serde_json::from_str(r#"{"answer":"Common symptoms include..."}"#).unwrap();
        assert_eq!(answer.answer, "Common symptoms include...");
    }

    #[test]
    fn test_answer_rejects_missing_field() {
        let result = serde_json::from_str::<Answer>(r#"{"reply":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/".to_string());
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_transport_error_display() {
        let network = TransportError::Network("connection refused".to_string());
        assert_eq!(network.to_string(), "network error: connection refused");

        let api = TransportError::Api {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(api.to_string(), "API error (HTTP 503): unavailable");

        let parse = TransportError::Parse("expected value".to_string());
        assert_eq!(parse.to_string(), "parse error: expected value");
    }
}
