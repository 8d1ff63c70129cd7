use crate::model::Session;

use super::{
    AssessmentState, Command, Effect, Event, GatewayStep, PendingCall, PendingRequest, Phase,
    StartedSession, Ticket,
};

/// Result of a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AssessmentState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn unchanged(state: &AssessmentState) -> Self {
        Self {
            state: state.clone(),
            effect: None,
        }
    }

    fn settled(state: AssessmentState) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    /// True when the event was ignored.
    #[must_use]
    pub fn is_noop(&self, previous: &AssessmentState) -> bool {
        self.effect.is_none() && &self.state == previous
    }
}

/// Pure state transition.
///
/// Events that are not valid in the current state leave it untouched and
/// request no gateway call. Responses whose ticket no longer matches the
/// outstanding call, or whose session differs from the current one, are
/// treated the same way.
#[must_use]
pub fn transition(state: &AssessmentState, event: Event) -> Transition {
    match event {
        Event::Command(Command::Begin) => begin(state),
        Event::Command(Command::Submit(answer)) => submit(state, answer),
        Event::Command(Command::Reset) => reset(state),
        Event::Started { ticket, result } => started(state, ticket, result),
        Event::Responded {
            ticket,
            session_id,
            result,
        } => responded(state, ticket, &session_id, result),
    }
}

fn begin(state: &AssessmentState) -> Transition {
    if state.pending.is_some() || matches!(state.phase, Phase::AwaitingAnswer { .. }) {
        return Transition::unchanged(state);
    }
    request_start(state)
}

fn reset(state: &AssessmentState) -> Transition {
    // Any outstanding call is superseded by the new ticket.
    request_start(state)
}

fn request_start(state: &AssessmentState) -> Transition {
    let mut next = state.clone();
    let ticket = next.issue_ticket();
    next.phase = Phase::Idle;
    next.error = None;
    next.pending = Some(PendingCall {
        ticket,
        request: PendingRequest::Start,
    });
    Transition {
        state: next,
        effect: Some(Effect::Start { ticket }),
    }
}

fn submit(state: &AssessmentState, answer: String) -> Transition {
    if state.pending.is_some() {
        return Transition::unchanged(state);
    }
    let Phase::AwaitingAnswer { session, question } = &state.phase else {
        return Transition::unchanged(state);
    };

    let session_id = session.id().clone();
    let step = question.step().clone();
    let mut next = state.clone();
    let ticket = next.issue_ticket();
    next.error = None;
    next.pending = Some(PendingCall {
        ticket,
        request: PendingRequest::Respond {
            session_id: session_id.clone(),
            step,
            answer: answer.clone(),
        },
    });
    Transition {
        state: next,
        effect: Some(Effect::Respond {
            ticket,
            session_id,
            answer,
        }),
    }
}

fn started(
    state: &AssessmentState,
    ticket: Ticket,
    result: Result<StartedSession, String>,
) -> Transition {
    let awaited = matches!(
        &state.pending,
        Some(PendingCall { ticket: pending, request: PendingRequest::Start }) if *pending == ticket
    );
    if !awaited {
        return Transition::unchanged(state);
    }

    let mut next = state.clone();
    next.pending = None;
    match result {
        Ok(StartedSession {
            session_id,
            question,
        }) => {
            let session = Session::new(session_id, question.step().clone());
            next.phase = Phase::AwaitingAnswer { session, question };
            next.error = None;
        }
        Err(message) => {
            next.phase = Phase::Idle;
            next.error = Some(message);
        }
    }
    Transition::settled(next)
}

fn responded(
    state: &AssessmentState,
    ticket: Ticket,
    session_id: &crate::model::SessionId,
    result: Result<GatewayStep, String>,
) -> Transition {
    let Some(PendingCall {
        ticket: pending_ticket,
        request:
            PendingRequest::Respond {
                session_id: pending_session,
                step,
                answer,
            },
    }) = &state.pending
    else {
        return Transition::unchanged(state);
    };
    if *pending_ticket != ticket || pending_session != session_id {
        return Transition::unchanged(state);
    }
    let Phase::AwaitingAnswer { session, .. } = &state.phase else {
        return Transition::unchanged(state);
    };
    if session.id() != session_id {
        return Transition::unchanged(state);
    }

    let mut session = session.clone();
    let step = step.clone();
    let answer = answer.clone();
    let mut next = state.clone();
    next.pending = None;

    match result {
        Ok(GatewayStep::Next(question)) => {
            session.advance(step, answer, question.step().clone());
            next.phase = Phase::AwaitingAnswer { session, question };
            next.error = None;
        }
        Ok(GatewayStep::Complete(summary)) => {
            session.complete(step, answer);
            next.phase = Phase::Complete { session, summary };
            next.error = None;
        }
        Err(message) => {
            // Question and answers stay as they were.
            next.error = Some(message);
        }
    }
    Transition::settled(next)
}
