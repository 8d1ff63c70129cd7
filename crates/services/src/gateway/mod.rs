//! Contract with the remote assessment service.
//!
//! The service owns all diagnostic logic. Callers only see typed questions,
//! summaries and chat replies; wire DTOs stay private to `http`.

use std::env;

use async_trait::async_trait;
use symptom_core::Language;
use symptom_core::machine::{GatewayStep, StartedSession};
use symptom_core::model::{ApiBaseUrl, SessionId};

use crate::error::GatewayError;

mod http;

pub use http::HttpGateway;

pub const API_URL_ENV: &str = "SYMPTOM_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[async_trait]
pub trait AssessmentGateway: Send + Sync {
    /// Open a new session and fetch its first question.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport failure, non-2xx status, or a reply
    /// missing required fields.
    async fn start(&self) -> Result<StartedSession, GatewayError>;

    /// Send the answer to the current question.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport failure, non-2xx status, or a reply
    /// missing required fields.
    async fn respond(
        &self,
        session_id: &SessionId,
        answer: &str,
    ) -> Result<GatewayStep, GatewayError>;
}

/// Reply from the stateless chat endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    pub content: Option<String>,
    pub error: Option<String>,
}

impl ChatReply {
    /// First choice content, else the service error text.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        self.content
            .filter(|text| !text.is_empty())
            .or(self.error.filter(|text| !text.is_empty()))
    }
}

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `GatewayError` when the request cannot be sent or the body is
    /// not valid JSON.
    async fn complete(
        &self,
        message: &str,
        language: Language,
    ) -> Result<ChatReply, GatewayError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: ApiBaseUrl,
}

impl GatewayConfig {
    #[must_use]
    pub fn new(base_url: ApiBaseUrl) -> Self {
        Self { base_url }
    }

    /// # Errors
    ///
    /// Returns `symptom_core::Error` if `raw` is not an http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, symptom_core::Error> {
        Ok(Self::new(ApiBaseUrl::parse(raw)?))
    }

    /// Read `SYMPTOM_API_URL`, defaulting to the local development server.
    ///
    /// # Errors
    ///
    /// Returns `symptom_core::Error` if the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, symptom_core::Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`GatewayConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `symptom_core::Error` if the variable holds an invalid URL.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, symptom_core::Error> {
        let raw = lookup(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.into());
        Self::parse(&raw)
    }
}
