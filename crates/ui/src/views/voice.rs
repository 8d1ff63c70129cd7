use dioxus::prelude::*;
use services::VoiceAvailability;
use symptom_core::{Language, translate};

use crate::context::AppContext;

/// Microphone control that hands a finished transcript to its input box.
///
/// Renders disabled, with an explanation, when no capture backend is
/// available.
#[component]
pub fn VoiceButton(
    disabled: bool,
    language: Language,
    on_transcript: EventHandler<String>,
) -> Element {
    let capture = try_use_context::<AppContext>().map(|ctx| ctx.voice_capture());
    let mut listening = use_signal(|| false);
    let mut error_key = use_signal(|| None::<&'static str>);

    let supported = capture
        .as_ref()
        .is_some_and(|capture| capture.availability() == VoiceAvailability::Available);
    if !supported {
        let unsupported = translate(language, "voice.error");
        return rsx! {
            button {
                class: "voice-button unsupported",
                r#type: "button",
                disabled: true,
                title: "{unsupported}",
                "🎤"
            }
        };
    }

    let is_listening = listening();
    let title = if is_listening {
        translate(language, "voice.listening")
    } else {
        translate(language, "voice.start")
    };
    let status = match error_key() {
        Some(key) => Some(translate(language, key)),
        None if is_listening => Some(translate(language, "voice.listening")),
        None => None,
    };

    rsx! {
        div { class: "voice",
            button {
                class: if is_listening { "voice-button listening" } else { "voice-button" },
                r#type: "button",
                disabled: disabled || is_listening,
                title: "{title}",
                onclick: move |_| {
                    if listening() {
                        return;
                    }
                    let Some(capture) = capture.clone() else {
                        return;
                    };
                    tracing::debug!(locale = language.speech_locale(), "listening for speech");
                    listening.set(true);
                    error_key.set(None);
                    spawn(async move {
                        match capture.listen(language).await {
                            Ok(text) => on_transcript.call(text),
                            Err(err) => {
                                tracing::warn!(error = %err, "voice capture failed");
                                error_key.set(Some(err.translation_key()));
                            }
                        }
                        listening.set(false);
                    });
                },
                "🎤"
            }
            if let Some(status) = status {
                p { class: "voice-status", "{status}" }
            }
        }
    }
}
