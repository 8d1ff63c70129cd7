mod assessment_vm;
mod chat_vm;
mod markdown_vm;
mod time_fmt;

pub use assessment_vm::{
    AssessmentScreenVm, BadgeVm, PredictionVm, QuestionVm, StartVm, SummaryVm,
    map_assessment_screen,
};
pub use chat_vm::{BubbleBody, ChatBubbleVm, map_chat_bubble, map_chat_bubbles};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use time_fmt::{format_clock_time, format_clock_time_in};
