use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AssessmentGateway, AssessmentService, ChatGateway, ChatReply, ChatService, Clock,
    GatewayError, LanguageService, UnsupportedVoiceCapture, VoiceCapture,
};
use storage::repository::Storage;
use symptom_core::Language;
use symptom_core::machine::{GatewayStep, StartedSession};
use symptom_core::model::{Question, SessionId, StepId};
use symptom_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::chat::ChatTestHandles;
use crate::views::guided::GuidedTestHandles;
use crate::views::language::LanguageTestHandles;
use crate::views::{ChatView, GuidedAssessmentView, use_ui_state_provider};

/// Gateway that answers from a queue, one entry per call.
#[derive(Default)]
pub struct FakeGateway {
    steps: Mutex<VecDeque<GatewayStep>>,
    chat: Mutex<VecDeque<Result<ChatReply, GatewayError>>>,
    fail_start: bool,
    chat_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn with_steps(steps: Vec<GatewayStep>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            ..Self::default()
        }
    }

    pub fn failing_start() -> Self {
        Self {
            fail_start: true,
            ..Self::default()
        }
    }

    pub fn push_chat(&self, reply: Result<ChatReply, GatewayError>) {
        self.chat.lock().unwrap().push_back(reply);
    }

    /// Number of chat requests that reached the gateway.
    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssessmentGateway for FakeGateway {
    async fn start(&self) -> Result<StartedSession, GatewayError> {
        if self.fail_start {
            return Err(GatewayError::MalformedResponse("session_id"));
        }
        Ok(StartedSession {
            session_id: SessionId::new("session-1"),
            question: Question::new(StepId::Symptom, "What symptom are you experiencing?")
                .with_examples(["headache", "fever"]),
        })
    }

    async fn respond(
        &self,
        _session_id: &SessionId,
        _answer: &str,
    ) -> Result<GatewayStep, GatewayError> {
        self.steps
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(GatewayError::MalformedResponse("step"))
    }
}

#[async_trait]
impl ChatGateway for FakeGateway {
    async fn complete(
        &self,
        _message: &str,
        _language: Language,
    ) -> Result<ChatReply, GatewayError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.chat
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ChatReply::default()))
    }
}

#[derive(Clone)]
struct TestApp {
    language: Language,
    assessment: Arc<AssessmentService>,
    chat: Arc<ChatService>,
    languages: Arc<LanguageService>,
    voice: Arc<dyn VoiceCapture>,
}

impl UiApp for TestApp {
    fn assessment_service(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }

    fn chat_service(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    fn language_service(&self) -> Arc<LanguageService> {
        Arc::clone(&self.languages)
    }

    fn voice_capture(&self) -> Arc<dyn VoiceCapture> {
        Arc::clone(&self.voice)
    }

    fn initial_language(&self) -> Language {
        self.language
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Guided,
    Chat,
    /// Full layout with header, footer and the real route table.
    Shell,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    guided_handles: GuidedTestHandles,
    chat_handles: ChatTestHandles,
    language_handles: LanguageTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_ui_state_provider(ctx.initial_language());
    use_context_provider(|| props.view);
    use_context_provider(|| props.guided_handles.clone());
    use_context_provider(|| props.chat_handles.clone());
    use_context_provider(|| props.language_handles.clone());
    match props.view {
        ViewKind::Shell => rsx! { Router::<Route> {} },
        _ => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Chat => rsx! { ChatView {} },
        _ => rsx! { GuidedAssessmentView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub gateway: Arc<FakeGateway>,
    pub guided: GuidedTestHandles,
    pub chat: ChatTestHandles,
    pub language: LanguageTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned gateway calls finish and re-render.
    pub async fn drive_async(&mut self) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, gateway: FakeGateway) -> ViewHarness {
    let voice = Arc::new(UnsupportedVoiceCapture);
    setup_view_harness_with(view, gateway, Language::English, voice)
}

pub fn setup_view_harness_with(
    view: ViewKind,
    gateway: FakeGateway,
    language: Language,
    voice: Arc<dyn VoiceCapture>,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let gateway = Arc::new(gateway);
    let assessment_gateway: Arc<dyn AssessmentGateway> = gateway.clone();
    let chat_gateway: Arc<dyn ChatGateway> = gateway.clone();

    let app = Arc::new(TestApp {
        language,
        assessment: Arc::new(AssessmentService::new(assessment_gateway)),
        chat: Arc::new(ChatService::new(chat_gateway, Clock::fixed(fixed_now()))),
        languages: Arc::new(LanguageService::new(Arc::clone(&storage.preferences))),
        voice,
    });
    let guided = GuidedTestHandles::default();
    let chat = ChatTestHandles::default();
    let language_handles = LanguageTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            guided_handles: guided.clone(),
            chat_handles: chat.clone(),
            language_handles: language_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        gateway,
        guided,
        chat,
        language: language_handles,
    }
}
