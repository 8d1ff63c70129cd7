#![forbid(unsafe_code)]

pub mod assessment;
pub mod chat;
pub mod error;
pub mod gateway;
pub mod language;
pub mod voice;

pub use symptom_core::Clock;

pub use assessment::{AssessmentService, AssessmentSession, apply_event};
pub use chat::ChatService;
pub use error::{GatewayError, LanguageServiceError, VoiceError};
pub use gateway::{AssessmentGateway, ChatGateway, ChatReply, GatewayConfig, HttpGateway};
pub use language::LanguageService;
pub use voice::{UnsupportedVoiceCapture, VoiceAvailability, VoiceCapture};
