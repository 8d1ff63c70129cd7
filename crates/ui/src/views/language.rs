use dioxus::prelude::*;
use symptom_core::Language;

use crate::context::AppContext;
use crate::views::state::use_ui_state;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn LanguageSelector() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let mut language = ui.language;
    let current = language();
    let service = ctx.language_service();
    let title = ui.t("app.title");

    let choose = use_callback(move |code: String| {
        let Some(next) = Language::from_code(&code) else {
            return;
        };
        if next == *language.peek() {
            return;
        }
        language.set(next);
        let service = service.clone();
        spawn(async move {
            if let Err(err) = service.save(next).await {
                tracing::warn!(error = %err, "failed to save language preference");
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LanguageTestHandles>() {
                handles.register(choose);
            }
        }
    }

    let options = Language::ALL
        .iter()
        .map(|lang| (lang.code(), lang.flag(), lang.native_name(), *lang == current));

    rsx! {
        label { class: "language-selector", title: "{title}",
            span { class: "language-flag", "🌐" }
            select {
                value: current.code(),
                onchange: move |evt: FormEvent| choose.call(evt.value()),
                for (code, flag, name, selected) in options {
                    option { key: "{code}", value: code, selected, "{flag} {name}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LanguageTestHandles {
    choose: Rc<RefCell<Option<Callback<String>>>>,
}

#[cfg(test)]
impl LanguageTestHandles {
    pub(crate) fn register(&self, choose: Callback<String>) {
        *self.choose.borrow_mut() = Some(choose);
    }

    pub(crate) fn choose(&self) -> Callback<String> {
        (*self.choose.borrow()).expect("language selector registered")
    }
}
