use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use symptom_core::model::prepare_answer;

use crate::context::AppContext;
use crate::views::state::use_ui_state;
use crate::views::voice::VoiceButton;
use crate::vm::{BubbleBody, map_chat_bubbles};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let mut transcript = ui.transcript;
    let mut pending = ui.chat_pending;
    let mut input = use_signal(String::new);
    let chat = ctx.chat_service();

    let send = use_callback(move |()| {
        if *pending.peek() {
            return;
        }
        let Some(message) = prepare_answer(&input.peek()) else {
            return;
        };
        let language = *ui.language.peek();
        let chat = chat.clone();
        transcript.write().push_user(message.clone(), chat.clock().now());
        input.set(String::new());
        pending.set(true);
        // Root scope, so the reply is kept if the user leaves chat mode.
        let _ = spawn_forever(async move {
            let reply = chat.reply(&message, language).await;
            transcript.write().push_bot(reply, chat.clock().now());
            pending.set(false);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ChatTestHandles>() {
                handles.register(send, input);
            }
        }
    }

    let language = (ui.language)();
    let welcome = ui.t("chat.welcome");
    let description = ui.t("chat.description");
    let placeholder = ui.t("chat.placeholder");
    let sending = ui.t("chat.sending");
    let is_pending = pending();
    let bubbles = map_chat_bubbles(transcript.read().messages());
    let can_send = !is_pending && !input.read().trim().is_empty();

    rsx! {
        div { class: "page chat",
            div { class: "transcript",
                if bubbles.is_empty() {
                    div { class: "chat-welcome",
                        div { class: "start-icon", "💬" }
                        h2 { "{welcome}" }
                        p { class: "muted", "{description}" }
                    }
                }
                for bubble in bubbles {
                    div {
                        key: "{bubble.key}",
                        class: if bubble.from_user { "bubble user" } else { "bubble bot" },
                        match bubble.body {
                            BubbleBody::Text(text) => rsx! {
                                p { class: "bubble-text", "{text}" }
                            },
                            BubbleBody::Html(html) => rsx! {
                                div { class: "bubble-html", dangerous_inner_html: "{html}" }
                            },
                        }
                        span { class: "bubble-time", "{bubble.time}" }
                    }
                }
                if is_pending {
                    div { class: "bubble bot typing", "{sending}" }
                }
            }
            form {
                class: "answer-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send.call(());
                },
                input {
                    r#type: "text",
                    value: "{input}",
                    placeholder: "{placeholder}",
                    disabled: is_pending,
                    oninput: move |evt: FormEvent| input.set(evt.value()),
                }
                VoiceButton {
                    disabled: is_pending,
                    language,
                    on_transcript: move |text: String| input.set(text),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: !can_send,
                    "➤"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ChatTestHandles {
    send: Rc<RefCell<Option<Callback<()>>>>,
    input: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl ChatTestHandles {
    pub(crate) fn register(&self, send: Callback<()>, input: Signal<String>) {
        *self.send.borrow_mut() = Some(send);
        *self.input.borrow_mut() = Some(input);
    }

    pub(crate) fn send(&self) -> Callback<()> {
        (*self.send.borrow()).expect("chat send registered")
    }

    pub(crate) fn input(&self) -> Signal<String> {
        (*self.input.borrow()).expect("chat input registered")
    }
}
