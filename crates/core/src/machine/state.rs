use crate::model::{CollectedAnswers, Question, Session, SessionId, StepId, Summary};

use super::Ticket;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    AwaitingAnswer { session: Session, question: Question },
    Complete { session: Session, summary: Summary },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Start,
    Respond {
        session_id: SessionId,
        step: StepId,
        answer: String,
    },
}

/// The single outstanding gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCall {
    pub ticket: Ticket,
    pub request: PendingRequest,
}

/// Snapshot of the guided assessment. The view only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentState {
    pub(super) phase: Phase,
    pub(super) error: Option<String>,
    pub(super) pending: Option<PendingCall>,
    pub(super) next_ticket: u64,
}

impl Default for AssessmentState {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            error: None,
            pending: None,
            next_ticket: 1,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingCall> {
        self.pending.as_ref()
    }

    /// True while a gateway call is outstanding; input controls stay disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Complete { .. })
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Idle => None,
            Phase::AwaitingAnswer { session, .. } | Phase::Complete { session, .. } => {
                Some(session)
            }
        }
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session().map(Session::id)
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        match &self.phase {
            Phase::AwaitingAnswer { question, .. } => Some(question),
            _ => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&Summary> {
        match &self.phase {
            Phase::Complete { summary, .. } => Some(summary),
            _ => None,
        }
    }

    /// Answers of the current session; empty when no session exists.
    #[must_use]
    pub fn collected_answers(&self) -> CollectedAnswers {
        self.session()
            .map(|session| session.answers().clone())
            .unwrap_or_default()
    }

    pub(super) fn issue_ticket(&mut self) -> Ticket {
        let ticket = Ticket::new(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        ticket
    }
}
