mod chat;
mod endpoint;
mod ids;
mod question;
mod session;
pub(crate) mod step;
mod summary;

pub use chat::{ChatMessage, Sender, Transcript};
pub use endpoint::{ApiBaseUrl, EndpointError};
pub use ids::{MessageId, SessionId};
pub use question::{AnswerKind, Question, prepare_answer};
pub use session::{CollectedAnswers, Session};
pub use step::{NEUTRAL_COLOR, STEP_COUNT, StepDisplay, StepIcon, StepId};
pub use summary::{Prediction, Severity, Summary, Urgency};
