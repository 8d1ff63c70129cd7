use std::sync::Arc;

use services::{AssessmentService, ChatService, LanguageService, VoiceCapture};
use symptom_core::Language;

pub trait UiApp: Send + Sync {
    fn assessment_service(&self) -> Arc<AssessmentService>;
    fn chat_service(&self) -> Arc<ChatService>;
    fn language_service(&self) -> Arc<LanguageService>;
    fn voice_capture(&self) -> Arc<dyn VoiceCapture>;

    /// Language restored from preferences at launch.
    fn initial_language(&self) -> Language;
}

#[derive(Clone)]
pub struct AppContext {
    initial_language: Language,
    assessment: Arc<AssessmentService>,
    chat: Arc<ChatService>,
    language: Arc<LanguageService>,
    voice: Arc<dyn VoiceCapture>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_language: app.initial_language(),
            assessment: app.assessment_service(),
            chat: app.chat_service(),
            language: app.language_service(),
            voice: app.voice_capture(),
        }
    }

    #[must_use]
    pub fn initial_language(&self) -> Language {
        self.initial_language
    }

    #[must_use]
    pub fn assessment_service(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }

    #[must_use]
    pub fn chat_service(&self) -> Arc<ChatService> {
        Arc::clone(&self.chat)
    }

    #[must_use]
    pub fn language_service(&self) -> Arc<LanguageService> {
        Arc::clone(&self.language)
    }

    #[must_use]
    pub fn voice_capture(&self) -> Arc<dyn VoiceCapture> {
        Arc::clone(&self.voice)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
