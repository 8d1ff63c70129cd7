mod chat;
mod guided;
mod language;
mod state;
mod voice;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatView;
pub use guided::{AssessmentScreen, GuidedAssessmentView};
pub use language::LanguageSelector;
pub use state::{UiState, use_ui_state, use_ui_state_provider};
pub use voice::VoiceButton;
