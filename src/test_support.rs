//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::transport::{Answer, AnswerService, TransportError};

/// What a [`StubAnswerService`] should hand back.
pub enum StubReply {
    Answer(String),
    Fail,
}

/// A canned-response service for tests that don't need real HTTP.
pub struct StubAnswerService {
    reply: StubReply,
}

impl StubAnswerService {
    pub fn new(reply: StubReply) -> Self {
        Self { reply }
    }
}

#[async_trait]
impl AnswerService for StubAnswerService {
    async fn send_query(&self, _query: &str) -> Result<Answer, TransportError> {
        match &self.reply {
            StubReply::Answer(text) => Ok(Answer {
                answer: text.clone(),
            }),
            StubReply::Fail => Err(TransportError::Network(
                "stub: connection refused".to_string(),
            )),
        }
    }
}
