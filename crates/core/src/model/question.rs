use crate::model::StepId;

/// Expected shape of the user's answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnswerKind {
    #[default]
    FreeText,
    Other(String),
}

impl AnswerKind {
    /// Missing or `"text"` wire values mean free text.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("" | "text") => AnswerKind::FreeText,
            Some(other) => AnswerKind::Other(other.to_string()),
        }
    }
}

/// The question currently presented to the user.
///
/// Replaced wholesale on every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    step: StepId,
    text: String,
    kind: AnswerKind,
    examples: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn new(step: StepId, text: impl Into<String>) -> Self {
        Self {
            step,
            text: text.into(),
            kind: AnswerKind::FreeText,
            examples: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: AnswerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Attach hint answers, dropping blank entries.
    #[must_use]
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples
            .into_iter()
            .map(Into::into)
            .filter(|example| !example.trim().is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn step(&self) -> &StepId {
        &self.step
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> &AnswerKind {
        &self.kind
    }

    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }
}

/// Trim user input and reject blank answers before they reach the machine.
#[must_use]
pub fn prepare_answer(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
