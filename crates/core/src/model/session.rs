use std::collections::BTreeMap;

use crate::model::{SessionId, StepId};

/// Answers recorded so far, keyed by the step they answered.
///
/// Entries are only ever added. If the gateway asks the same step twice the
/// newer answer replaces the text, but the entry itself stays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectedAnswers(BTreeMap<StepId, String>);

impl CollectedAnswers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: StepId, answer: impl Into<String>) {
        self.0.insert(step, answer.into());
    }

    #[must_use]
    pub fn get(&self, step: &StepId) -> Option<&str> {
        self.0.get(step).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in questionnaire order.
    pub fn iter(&self) -> impl Iterator<Item = (&StepId, &str)> {
        self.0.iter().map(|(step, answer)| (step, answer.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(StepId, S)> for CollectedAnswers {
    fn from_iter<T: IntoIterator<Item = (StepId, S)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(step, answer)| (step, answer.into()))
                .collect(),
        )
    }
}

/// One in-progress or completed guided assessment. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    current_step: StepId,
    answers: CollectedAnswers,
    is_complete: bool,
}

impl Session {
    #[must_use]
    pub fn new(id: SessionId, first_step: StepId) -> Self {
        Self {
            id,
            current_step: first_step,
            answers: CollectedAnswers::new(),
            is_complete: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn current_step(&self) -> &StepId {
        &self.current_step
    }

    #[must_use]
    pub fn answers(&self) -> &CollectedAnswers {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Record the answer for `answered` and move on to `next`.
    pub fn advance(&mut self, answered: StepId, answer: impl Into<String>, next: StepId) {
        self.answers.record(answered, answer);
        self.current_step = next;
    }

    /// Record the final answer and mark the session finished.
    pub fn complete(&mut self, answered: StepId, answer: impl Into<String>) {
        self.answers.record(answered, answer);
        self.is_complete = true;
    }
}
