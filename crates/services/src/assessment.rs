use std::sync::Arc;

use symptom_core::machine::{AssessmentState, Command, Effect, Event, transition};
use symptom_core::model::prepare_answer;

use crate::error::GatewayError;
use crate::gateway::AssessmentGateway;

const START_FAILED: &str = "Failed to start assessment";
const SUBMIT_FAILED: &str = "Failed to submit response";

/// Performs the gateway call an effect asks for.
#[derive(Clone)]
pub struct AssessmentService {
    gateway: Arc<dyn AssessmentGateway>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(gateway: Arc<dyn AssessmentGateway>) -> Self {
        Self { gateway }
    }

    /// Run `effect` and turn its outcome into the event that answers it.
    ///
    /// Failures become display strings on the event; nothing is propagated.
    pub async fn execute(&self, effect: Effect) -> Event {
        match effect {
            Effect::Start { ticket } => {
                let result = self.gateway.start().await.map_err(|err| {
                    tracing::warn!(error = %err, "assessment start failed");
                    describe(START_FAILED, &err)
                });
                if let Ok(started) = &result {
                    tracing::info!(session_id = %started.session_id, "assessment started");
                }
                Event::Started { ticket, result }
            }
            Effect::Respond {
                ticket,
                session_id,
                answer,
            } => {
                let result = self
                    .gateway
                    .respond(&session_id, &answer)
                    .await
                    .map_err(|err| {
                        tracing::warn!(error = %err, %session_id, "answer submission failed");
                        describe(SUBMIT_FAILED, &err)
                    });
                Event::Responded {
                    ticket,
                    session_id,
                    result,
                }
            }
        }
    }
}

/// Move `state` through `event` and return the gateway call it requests.
///
/// Gateway replies the machine ignores are logged as stale.
pub fn apply_event(state: &mut AssessmentState, event: Event) -> Option<Effect> {
    let is_reply = !matches!(event, Event::Command(_));
    let next = transition(state, event);
    if is_reply && next.is_noop(state) {
        tracing::debug!("ignoring stale gateway response");
    }
    *state = next.state;
    next.effect
}

fn describe(action: &str, err: &GatewayError) -> String {
    match err {
        GatewayError::HttpStatus(_) => action.to_string(),
        other => format!("{action}: {other}"),
    }
}

/// Owns an `AssessmentState` and runs each command through to completion.
///
/// Views that need to render while a call is in flight use `apply` and
/// `AssessmentService::execute` separately instead.
pub struct AssessmentSession {
    service: AssessmentService,
    state: AssessmentState,
}

impl AssessmentSession {
    #[must_use]
    pub fn new(service: AssessmentService) -> Self {
        Self {
            service,
            state: AssessmentState::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    /// Apply one event and return the gateway call it requests, if any.
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        apply_event(&mut self.state, event)
    }

    /// Apply `event` and keep executing effects until the machine settles.
    pub async fn dispatch(&mut self, event: Event) {
        let mut effect = self.apply(event);
        while let Some(pending) = effect.take() {
            let reply = self.service.execute(pending).await;
            effect = self.apply(reply);
        }
    }

    pub async fn begin(&mut self) {
        self.dispatch(Command::Begin.into()).await;
    }

    /// Submit trimmed input. Returns `false` without any gateway call when the
    /// input is blank.
    pub async fn submit(&mut self, input: &str) -> bool {
        let Some(answer) = prepare_answer(input) else {
            return false;
        };
        self.dispatch(Command::Submit(answer).into()).await;
        true
    }

    pub async fn reset(&mut self) {
        self.dispatch(Command::Reset.into()).await;
    }
}
