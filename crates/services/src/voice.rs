//! Speech-to-text capability.
//!
//! Recognition itself is platform-provided; this crate only defines the seam
//! the input surfaces call through.

use async_trait::async_trait;
use symptom_core::Language;

use crate::error::VoiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAvailability {
    Available,
    Unsupported,
}

#[async_trait]
pub trait VoiceCapture: Send + Sync {
    fn availability(&self) -> VoiceAvailability;

    /// Listen for one utterance and return its transcript.
    ///
    /// # Errors
    ///
    /// Returns `VoiceError` if capture is unsupported, the microphone is
    /// denied, or recognition fails.
    async fn listen(&self, language: Language) -> Result<String, VoiceError>;
}

/// Capture for platforms without speech recognition.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedVoiceCapture;

#[async_trait]
impl VoiceCapture for UnsupportedVoiceCapture {
    fn availability(&self) -> VoiceAvailability {
        VoiceAvailability::Unsupported
    }

    async fn listen(&self, _language: Language) -> Result<String, VoiceError> {
        Err(VoiceError::Unsupported)
    }
}
