use std::sync::Arc;

use storage::repository::PreferenceRepository;
use symptom_core::{Language, PREFERRED_LANGUAGE_KEY};

use crate::error::LanguageServiceError;

/// Persists the chosen interface language across launches.
#[derive(Clone)]
pub struct LanguageService {
    preferences: Arc<dyn PreferenceRepository>,
}

impl LanguageService {
    #[must_use]
    pub fn new(preferences: Arc<dyn PreferenceRepository>) -> Self {
        Self { preferences }
    }

    /// Stored language, or English when nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns `LanguageServiceError` if storage cannot be read.
    pub async fn load(&self) -> Result<Language, LanguageServiceError> {
        let stored = self
            .preferences
            .get_preference(PREFERRED_LANGUAGE_KEY)
            .await?;
        let language = match stored.as_deref().map(Language::from_code) {
            Some(Some(language)) => language,
            Some(None) => {
                tracing::warn!(stored = ?stored, "ignoring unrecognised language preference");
                Language::default()
            }
            None => Language::default(),
        };
        Ok(language)
    }

    /// # Errors
    ///
    /// Returns `LanguageServiceError` if storage cannot be written.
    pub async fn save(&self, language: Language) -> Result<(), LanguageServiceError> {
        self.preferences
            .set_preference(PREFERRED_LANGUAGE_KEY, language.code())
            .await?;
        tracing::info!(language = language.code(), "saved language preference");
        Ok(())
    }
}
