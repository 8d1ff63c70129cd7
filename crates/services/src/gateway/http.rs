use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use symptom_core::Language;
use symptom_core::machine::{GatewayStep, StartedSession};
use symptom_core::model::{
    AnswerKind, Prediction, Question, SessionId, Severity, StepId, Summary, Urgency,
};

use super::{AssessmentGateway, ChatGateway, ChatReply, GatewayConfig};
use crate::error::GatewayError;

/// `reqwest`-backed gateway for the assessment and chat endpoints.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl AssessmentGateway for HttpGateway {
    async fn start(&self) -> Result<StartedSession, GatewayError> {
        let url = self.config.base_url.join("/assessment/start");
        tracing::debug!(%url, "starting assessment");

        let response = self.client.post(url).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status()));
        }

        let body: StartResponse = response.json().await?;
        body.into_started()
    }

    async fn respond(
        &self,
        session_id: &SessionId,
        answer: &str,
    ) -> Result<GatewayStep, GatewayError> {
        let url = self.config.base_url.join("/assessment/respond");
        tracing::debug!(%url, session_id = %session_id, "submitting answer");

        let payload = RespondRequest {
            session_id: session_id.as_str(),
            response: answer,
        };
        let response = self.client.post(url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status()));
        }

        let body: RespondResponse = response.json().await?;
        body.into_step()
    }
}

#[async_trait]
impl ChatGateway for HttpGateway {
    async fn complete(
        &self,
        message: &str,
        language: Language,
    ) -> Result<ChatReply, GatewayError> {
        let url = self.config.base_url.join("/chat");
        tracing::debug!(%url, language = language.code(), "sending chat message");

        let payload = ChatRequest {
            message,
            language: language.code(),
        };
        // Error bodies carry an `error` field, so the status is not checked.
        let response = self.client.post(url).json(&payload).send().await?;
        let status = response.status();
        let body: ChatResponse = response.json().await?;
        if !status.is_success() {
            tracing::warn!(%status, "chat endpoint returned an error status");
        }

        Ok(body.into_reply())
    }
}

#[derive(Debug, Serialize)]
struct RespondRequest<'a> {
    session_id: &'a str,
    response: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    language: &'static str,
}

#[derive(Debug, Deserialize)]
struct StartResponse {
    session_id: Option<String>,
    #[serde(flatten)]
    question: QuestionDto,
}

impl StartResponse {
    fn into_started(self) -> Result<StartedSession, GatewayError> {
        let session_id = self
            .session_id
            .filter(|id| !id.is_empty())
            .ok_or(GatewayError::MalformedResponse("session_id"))?;
        Ok(StartedSession {
            session_id: SessionId::new(session_id),
            question: self.question.into_question()?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct QuestionDto {
    step: Option<String>,
    question: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    examples: Option<Vec<String>>,
}

impl QuestionDto {
    fn into_question(self) -> Result<Question, GatewayError> {
        let step = self.step.ok_or(GatewayError::MalformedResponse("step"))?;
        let text = self
            .question
            .ok_or(GatewayError::MalformedResponse("question"))?;
        Ok(Question::new(StepId::parse(&step), text)
            .with_kind(AnswerKind::parse(self.kind.as_deref()))
            .with_examples(self.examples.unwrap_or_default()))
    }
}

#[derive(Debug, Deserialize)]
struct RespondResponse {
    #[serde(default)]
    is_complete: bool,
    #[serde(flatten)]
    question: QuestionDto,
    assessment: Option<AssessmentDto>,
}

impl RespondResponse {
    fn into_step(self) -> Result<GatewayStep, GatewayError> {
        if self.is_complete {
            let assessment = self
                .assessment
                .ok_or(GatewayError::MalformedResponse("assessment"))?;
            Ok(GatewayStep::Complete(assessment.into_summary()))
        } else {
            Ok(GatewayStep::Next(self.question.into_question()?))
        }
    }
}

#[derive(Debug, Deserialize)]
struct AssessmentDto {
    #[serde(default)]
    primary_symptom: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    severity: String,
    #[serde(default)]
    additional_symptoms: Vec<String>,
    #[serde(default)]
    disease_predictions: Vec<PredictionDto>,
    #[serde(default)]
    urgency_level: String,
}

impl AssessmentDto {
    fn into_summary(self) -> Summary {
        let predictions = self
            .disease_predictions
            .into_iter()
            .map(|p| Prediction::new(p.disease, p.confidence))
            .collect();
        Summary::new(
            self.primary_symptom,
            self.duration,
            Severity::parse(&self.severity),
            self.additional_symptoms,
            predictions,
            Urgency::parse(&self.urgency_level),
        )
    }
}

#[derive(Debug, Deserialize)]
struct PredictionDto {
    disease: String,
    #[serde(default)]
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    error: Option<String>,
}

impl ChatResponse {
    fn into_reply(self) -> ChatReply {
        let content = self
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);
        ChatReply {
            content,
            error: self.error,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessageResponse>,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
