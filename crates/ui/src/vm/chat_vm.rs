use symptom_core::model::{ChatMessage, Sender};

use super::markdown_vm::markdown_to_html;
use super::time_fmt::format_clock_time;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BubbleBody {
    Text(String),
    Html(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubbleVm {
    pub key: String,
    pub from_user: bool,
    pub body: BubbleBody,
    pub time: String,
}

/// User text is shown verbatim; bot replies are rendered from Markdown.
#[must_use]
pub fn map_chat_bubble(message: &ChatMessage) -> ChatBubbleVm {
    let from_user = message.sender() == Sender::User;
    let body = if from_user {
        BubbleBody::Text(message.text().to_owned())
    } else {
        BubbleBody::Html(markdown_to_html(message.text()))
    };
    ChatBubbleVm {
        key: message.id().to_string(),
        from_user,
        body,
        time: format_clock_time(message.timestamp()),
    }
}

#[must_use]
pub fn map_chat_bubbles(messages: &[ChatMessage]) -> Vec<ChatBubbleVm> {
    messages.iter().map(map_chat_bubble).collect()
}
