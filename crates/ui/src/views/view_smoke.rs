use std::sync::Arc;

use async_trait::async_trait;
use dioxus::prelude::WritableExt;
use services::{ChatReply, GatewayError, VoiceAvailability, VoiceCapture, VoiceError};
use storage::PreferenceRepository;
use symptom_core::{Language, PREFERRED_LANGUAGE_KEY};
use symptom_core::machine::{Command, GatewayStep};
use symptom_core::model::{Prediction, Question, Severity, StepId, Summary, Urgency};

use super::test_harness::{
    FakeGateway, ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with,
};

struct EchoVoice;

#[async_trait]
impl VoiceCapture for EchoVoice {
    fn availability(&self) -> VoiceAvailability {
        VoiceAvailability::Available
    }

    async fn listen(&self, _language: Language) -> Result<String, VoiceError> {
        Ok("spoken words".into())
    }
}

fn migraine_summary() -> Summary {
    Summary::new(
        "headache",
        "2 days",
        Severity::Moderate,
        vec!["nausea".into()],
        vec![Prediction::new("Migraine", 0.72)],
        Urgency::High,
    )
}

fn dispatch(harness: &ViewHarness, command: Command) {
    let dispatch = harness.guided.dispatch();
    harness.dom.in_runtime(|| dispatch.call(command));
}

fn send_chat(harness: &ViewHarness, text: &str) {
    let mut input = harness.chat.input();
    let send = harness.chat.send();
    harness.dom.in_runtime(|| {
        input.set(text.to_string());
        send.call(());
    });
}

#[tokio::test(flavor = "current_thread")]
async fn guided_view_smoke_renders_start_prompt() {
    let mut harness = setup_view_harness(ViewKind::Guided, FakeGateway::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Guided Symptom Assessment"), "missing title in {html}");
    assert!(html.contains("Start Assessment"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn begin_renders_first_question_with_examples() {
    let mut harness = setup_view_harness(ViewKind::Guided, FakeGateway::default());
    harness.rebuild();

    dispatch(&harness, Command::Begin);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("What symptom are you experiencing?"), "missing question in {html}");
    assert!(html.contains("Step 1 of 5"), "missing progress label in {html}");
    assert!(html.contains("headache"), "missing example chip in {html}");
    assert!(html.contains("width: 20%"), "missing progress width in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_start_keeps_start_prompt_with_error() {
    let mut harness = setup_view_harness(ViewKind::Guided, FakeGateway::failing_start());
    harness.rebuild();

    dispatch(&harness, Command::Begin);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Failed to start assessment"), "missing error in {html}");
    assert!(html.contains("Start Assessment"), "start button should remain in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn next_question_replaces_the_current_one() {
    let gateway = FakeGateway::with_steps(vec![GatewayStep::Next(Question::new(
        StepId::Duration,
        "How long have you had it?",
    ))]);
    let mut harness = setup_view_harness(ViewKind::Guided, gateway);
    harness.rebuild();

    dispatch(&harness, Command::Begin);
    harness.drive_async().await;
    dispatch(&harness, Command::Submit("headache".into()));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("How long have you had it?"), "missing next question in {html}");
    assert!(html.contains("Step 2 of 5"), "missing progress label in {html}");
    assert!(!html.contains("What symptom are you experiencing?"));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_submit_shows_error_above_the_same_question() {
    let mut harness = setup_view_harness(ViewKind::Guided, FakeGateway::with_steps(Vec::new()));
    harness.rebuild();

    dispatch(&harness, Command::Begin);
    harness.drive_async().await;
    dispatch(&harness, Command::Submit("headache".into()));
    harness.drive_async().await;

    let html = harness.render();
    let error = html.find("Failed to submit response").expect("submit error rendered");
    let form = html.find("answer-form").expect("answer form rendered");
    assert!(error < form, "error should precede the form in {html}");
    assert!(html.contains("What symptom are you experiencing?"), "question lost in {html}");
    assert!(html.contains("Step 1 of 5"), "progress should not advance in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_assessment_renders_summary() {
    let gateway = FakeGateway::with_steps(vec![GatewayStep::Complete(migraine_summary())]);
    let mut harness = setup_view_harness(ViewKind::Guided, gateway);
    harness.rebuild();

    dispatch(&harness, Command::Begin);
    harness.drive_async().await;
    dispatch(&harness, Command::Submit("headache".into()));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Assessment Complete"), "missing heading in {html}");
    assert!(html.contains("HIGH"), "missing urgency badge in {html}");
    assert!(html.contains("MODERATE"), "missing severity badge in {html}");
    assert!(html.contains("Migraine"), "missing prediction in {html}");
    assert!(html.contains("72% match"), "missing match percent in {html}");
    assert!(html.contains("Important Disclaimer"), "missing disclaimer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_returns_to_start_prompt() {
    let mut harness = setup_view_harness(ViewKind::Guided, FakeGateway::default());
    harness.rebuild();

    dispatch(&harness, Command::Begin);
    harness.drive_async().await;
    dispatch(&harness, Command::Reset);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Start Assessment"), "missing start button in {html}");
    assert!(!html.contains("What symptom are you experiencing?"));
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_renders_welcome() {
    let mut harness = setup_view_harness(ViewKind::Chat, FakeGateway::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Free Chat Mode"), "missing welcome in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chat_send_renders_markdown_reply() {
    let gateway = FakeGateway::default();
    gateway.push_chat(Ok(ChatReply {
        content: Some("**Rest** and drink fluids".into()),
        error: None,
    }));
    let mut harness = setup_view_harness(ViewKind::Chat, gateway);
    harness.rebuild();

    send_chat(&harness, "  I have a cold  ");
    harness.drive_async().await;

    let html = harness.render();
    let user = html.find("I have a cold").expect("user bubble rendered");
    let bot = html.find("<strong>Rest</strong>").expect("reply rendered");
    assert!(user < bot, "user message should precede the reply in {html}");
    assert!(!html.contains("  I have a cold  "), "user text should be trimmed in {html}");
    assert!(!html.contains("Free Chat Mode"), "welcome should be hidden in {html}");
    assert_eq!(harness.gateway.chat_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn chat_failure_renders_connection_error() {
    let gateway = FakeGateway::default();
    gateway.push_chat(Err(GatewayError::MalformedResponse("body")));
    let mut harness = setup_view_harness(ViewKind::Chat, gateway);
    harness.rebuild();

    send_chat(&harness, "hello");
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Error connecting to the server. Please try again."),
        "missing connection error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn blank_chat_input_sends_nothing() {
    let mut harness = setup_view_harness(ViewKind::Chat, FakeGateway::default());
    harness.rebuild();

    send_chat(&harness, "   ");
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Free Chat Mode"), "transcript should stay empty in {html}");
    assert_eq!(harness.gateway.chat_calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn hindi_strings_render_when_selected() {
    let mut harness = setup_view_harness_with(
        ViewKind::Guided,
        FakeGateway::default(),
        Language::Hindi,
        Arc::new(services::UnsupportedVoiceCapture),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("मूल्यांकन शुरू करें"), "missing hindi start label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unsupported_voice_renders_disabled_button() {
    let mut harness = setup_view_harness(ViewKind::Guided, FakeGateway::default());
    harness.rebuild();

    dispatch(&harness, Command::Begin);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("voice-button unsupported"), "missing voice button in {html}");
    assert!(html.contains("Voice input not supported"), "missing explanation in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn available_voice_renders_active_button() {
    let mut harness = setup_view_harness_with(
        ViewKind::Chat,
        FakeGateway::default(),
        Language::English,
        Arc::new(EchoVoice),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Start speaking"), "missing voice title in {html}");
    assert!(!html.contains("voice-button unsupported"));
}

#[tokio::test(flavor = "current_thread")]
async fn shell_renders_header_and_footer() {
    let mut harness = setup_view_harness(ViewKind::Shell, FakeGateway::default());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Health Assistant"), "missing app title in {html}");
    assert!(html.contains("Your health is our priority"), "missing footer in {html}");
    assert!(html.contains("Start Assessment"), "missing guided view in {html}");
    let saved = harness.storage.preferences.get_preference(PREFERRED_LANGUAGE_KEY).await;
    assert_eq!(saved.unwrap(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn choosing_a_language_rerenders_and_persists_it() {
    let mut harness = setup_view_harness(ViewKind::Shell, FakeGateway::default());
    harness.rebuild();

    let choose = harness.language.choose();
    harness.dom.in_runtime(|| choose.call("hi".to_string()));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("स्वास्थ्य सहायक"), "missing hindi title in {html}");
    assert!(html.contains("मूल्यांकन शुरू करें"), "missing hindi start label in {html}");
    let saved = harness.storage.preferences.get_preference(PREFERRED_LANGUAGE_KEY).await;
    assert_eq!(saved.unwrap().as_deref(), Some("hi"));
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_language_code_changes_nothing() {
    let mut harness = setup_view_harness(ViewKind::Shell, FakeGateway::default());
    harness.rebuild();

    let choose = harness.language.choose();
    harness.dom.in_runtime(|| choose.call("xx".to_string()));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Health Assistant"), "title should stay english in {html}");
    let saved = harness.storage.preferences.get_preference(PREFERRED_LANGUAGE_KEY).await;
    assert_eq!(saved.unwrap(), None);
}
