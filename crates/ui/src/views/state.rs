use dioxus::prelude::*;
use symptom_core::machine::AssessmentState;
use symptom_core::model::Transcript;
use symptom_core::{Language, translate};

/// State shared by every route.
///
/// Owned by the root component so that switching between guided and chat
/// mode keeps both conversations, and so replies that arrive after a route
/// change still land somewhere.
#[derive(Clone, Copy, PartialEq)]
pub struct UiState {
    pub language: Signal<Language>,
    pub assessment: Signal<AssessmentState>,
    pub transcript: Signal<Transcript>,
    pub chat_pending: Signal<bool>,
}

impl UiState {
    /// Translate `key` for the current language and subscribe to changes.
    #[must_use]
    pub fn t(&self, key: &'static str) -> &'static str {
        translate((self.language)(), key)
    }
}

pub fn use_ui_state_provider(initial_language: Language) -> UiState {
    use_context_provider(|| UiState {
        language: Signal::new(initial_language),
        assessment: Signal::new(AssessmentState::new()),
        transcript: Signal::new(Transcript::new()),
        chat_pending: Signal::new(false),
    })
}

#[must_use]
pub fn use_ui_state() -> UiState {
    use_context::<UiState>()
}
