//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by gateway implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("gateway request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("gateway response is missing {0}")]
    MalformedResponse(&'static str),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Config(#[from] symptom_core::Error),
}

/// Errors emitted by `LanguageService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LanguageServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by voice capture.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VoiceError {
    #[error("speech recognition is not supported on this platform")]
    Unsupported,
    #[error("microphone access was denied")]
    PermissionDenied,
    #[error("speech recognition failed: {0}")]
    Failed(String),
}

impl VoiceError {
    /// Translation key for the message shown next to the voice control.
    #[must_use]
    pub fn translation_key(&self) -> &'static str {
        match self {
            VoiceError::PermissionDenied => "voice.allow",
            VoiceError::Unsupported | VoiceError::Failed(_) => "voice.error",
        }
    }
}
