use std::sync::Arc;

use serde_json::json;
use services::{
    AssessmentGateway, ChatGateway, ChatService, GatewayConfig, GatewayError, HttpGateway,
};
use symptom_core::machine::GatewayStep;
use symptom_core::model::{SessionId, Severity, StepId, Urgency};
use symptom_core::time::fixed_clock;
use symptom_core::Language;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(GatewayConfig::parse(&server.uri()).expect("mock server uri"))
}

#[tokio::test]
async fn start_parses_first_question() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assessment/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "abc-123",
            "step": "symptom",
            "question": "What symptom are you experiencing?",
            "type": "text",
            "examples": ["headache", "fever"],
            "is_complete": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let started = gateway_for(&server).start().await.unwrap();
    assert_eq!(started.session_id, SessionId::new("abc-123"));
    assert_eq!(started.question.step(), &StepId::Symptom);
    assert_eq!(started.question.examples(), ["headache", "fever"]);
}

#[tokio::test]
async fn start_reports_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assessment/start"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = gateway_for(&server).start().await.unwrap_err();
    assert!(matches!(err, GatewayError::HttpStatus(status) if status.as_u16() == 503));
}

#[tokio::test]
async fn respond_sends_session_and_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assessment/respond"))
        .and(body_json(json!({ "session_id": "abc-123", "response": "headache" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "is_complete": false,
            "step": "duration",
            "question": "How long have you been experiencing headache?",
            "type": "text"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let step = gateway_for(&server)
        .respond(&SessionId::new("abc-123"), "headache")
        .await
        .unwrap();
    let GatewayStep::Next(question) = step else {
        panic!("expected next question, got {step:?}");
    };
    assert_eq!(question.step(), &StepId::Duration);
    assert!(question.examples().is_empty());
}

#[tokio::test]
async fn respond_parses_completed_assessment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assessment/respond"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "is_complete": true,
            "assessment": {
                "primary_symptom": "headache",
                "duration": "2 days",
                "severity": "very_severe",
                "additional_symptoms": ["nausea"],
                "disease_predictions": [
                    { "disease": "Migraine", "confidence": 0.82 }
                ],
                "urgency_level": "high"
            }
        })))
        .mount(&server)
        .await;

    let step = gateway_for(&server)
        .respond(&SessionId::new("abc-123"), "none")
        .await
        .unwrap();
    let GatewayStep::Complete(summary) = step else {
        panic!("expected completion, got {step:?}");
    };
    assert_eq!(summary.severity(), &Severity::VerySevere);
    assert_eq!(summary.urgency(), &Urgency::High);
    assert_eq!(summary.predictions()[0].match_percent(), 82);
}

#[tokio::test]
async fn chat_returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({ "message": "I have a cough", "language": "hi" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Drink warm fluids." } }]
        })))
        .mount(&server)
        .await;

    let chat = ChatService::new(Arc::new(gateway_for(&server)), fixed_clock());
    let reply = chat.reply("I have a cough", Language::Hindi).await;
    assert_eq!(reply, "Drink warm fluids.");
}

#[tokio::test]
async fn chat_surfaces_service_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Model unavailable" })),
        )
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let reply = gateway.complete("hello", Language::English).await.unwrap();
    assert_eq!(reply.into_text().as_deref(), Some("Model unavailable"));
}

#[tokio::test]
async fn chat_falls_back_when_reply_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let chat = ChatService::new(Arc::new(gateway_for(&server)), fixed_clock());
    let reply = chat.reply("hello", Language::English).await;
    assert_eq!(reply, "Sorry, I could not process your request.");
}

#[tokio::test]
async fn chat_reports_connection_failure() {
    // Nothing listens on port 1.
    let gateway = HttpGateway::new(GatewayConfig::parse("http://127.0.0.1:1").unwrap());
    let chat = ChatService::new(Arc::new(gateway), fixed_clock());
    let reply = chat.reply("hello", Language::Marathi).await;
    assert_eq!(reply, "Error connecting to the server. Please try again.");
}
