use crate::model::{Question, SessionId, Summary};

/// Tag linking a gateway call to the response that answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

/// Commands the view can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Begin,
    /// Callers reject blank input before sending this.
    Submit(String),
    Reset,
}

/// Successful reply to a start call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedSession {
    pub session_id: SessionId,
    pub question: Question,
}

/// Successful reply to a respond call.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayStep {
    Next(Question),
    Complete(Summary),
}

/// Everything that can move the machine.
///
/// Gateway failures arrive as display-ready strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Command(Command),
    Started {
        ticket: Ticket,
        result: Result<StartedSession, String>,
    },
    Responded {
        ticket: Ticket,
        session_id: SessionId,
        result: Result<GatewayStep, String>,
    },
}

impl From<Command> for Event {
    fn from(command: Command) -> Self {
        Event::Command(command)
    }
}

/// Gateway call requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Start {
        ticket: Ticket,
    },
    Respond {
        ticket: Ticket,
        session_id: SessionId,
        answer: String,
    },
}

impl Effect {
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        match self {
            Effect::Start { ticket } | Effect::Respond { ticket, .. } => *ticket,
        }
    }
}
