use std::sync::Arc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use services::{AssessmentService, apply_event};
use symptom_core::machine::{AssessmentState, Command, Effect, Event};
use symptom_core::model::prepare_answer;
use symptom_core::{Language, fill, translate};

use crate::context::AppContext;
use crate::views::state::use_ui_state;
use crate::views::voice::VoiceButton;
use crate::vm::{AssessmentScreenVm, QuestionVm, StartVm, SummaryVm, map_assessment_screen};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn apply(mut assessment: Signal<AssessmentState>, event: Event) -> Option<Effect> {
    apply_event(&mut assessment.write(), event)
}

/// Run `event` and every gateway call that follows from it.
///
/// Calls run on the root scope so a reply still lands after the user
/// switches to chat mode.
fn drive(assessment: Signal<AssessmentState>, service: Arc<AssessmentService>, event: Event) {
    let Some(effect) = apply(assessment, event) else {
        return;
    };
    let _ = spawn_forever(async move {
        let mut effect = Some(effect);
        while let Some(pending) = effect.take() {
            let reply = service.execute(pending).await;
            effect = apply(assessment, reply);
        }
    });
}

#[component]
pub fn GuidedAssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let assessment = ui.assessment;
    let service = ctx.assessment_service();

    let dispatch = use_callback(move |command: Command| {
        drive(assessment, Arc::clone(&service), command.into());
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GuidedTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let vm = map_assessment_screen(&assessment.read());
    let language = (ui.language)();

    rsx! {
        div { class: "page guided",
            AssessmentScreen { vm, language, on_command: dispatch }
        }
    }
}

/// Presentational half of the guided assessment. Holds no machine state.
#[component]
pub fn AssessmentScreen(
    vm: AssessmentScreenVm,
    language: Language,
    on_command: EventHandler<Command>,
) -> Element {
    match vm {
        AssessmentScreenVm::Start(start) => rsx! {
            StartPrompt { vm: start, language, on_command }
        },
        AssessmentScreenVm::Question(question) => rsx! {
            QuestionPanel { vm: question, language, on_command }
        },
        AssessmentScreenVm::Summary(summary) => rsx! {
            SummaryPanel { vm: summary, language, on_command }
        },
    }
}

#[component]
fn StartPrompt(vm: StartVm, language: Language, on_command: EventHandler<Command>) -> Element {
    let title = translate(language, "assessment.title");
    let intro = translate(language, "assessment.intro");
    let label = if vm.starting {
        translate(language, "assessment.starting")
    } else {
        translate(language, "assessment.start")
    };

    rsx! {
        section { class: "assessment-start",
            div { class: "start-icon", "🩺" }
            h2 { "{title}" }
            p { class: "muted", "{intro}" }
            if let Some(error) = vm.error.as_ref() {
                div { class: "error", role: "alert", "{error}" }
            }
            button {
                class: "primary",
                disabled: vm.starting,
                onclick: move |_| on_command.call(Command::Begin),
                "{label}"
            }
        }
    }
}

#[component]
fn QuestionPanel(vm: QuestionVm, language: Language, on_command: EventHandler<Command>) -> Element {
    let mut input = use_signal(String::new);
    let busy = vm.busy;

    let step_label = fill(
        &fill(
            translate(language, "assessment.step_of"),
            "number",
            &vm.step_number.to_string(),
        ),
        "total",
        &vm.step_total.to_string(),
    );
    let reset_label = translate(language, "reset");
    let examples_label = translate(language, "examples");
    let placeholder = translate(language, "type_response");
    let progress_style = format!(
        "width: {}%; background-color: {};",
        vm.progress_percent, vm.color
    );
    let can_send = !busy && !input.read().trim().is_empty();

    rsx! {
        section { class: "assessment-question",
            div { class: "progress",
                div { class: "progress-header",
                    span { class: "step-icon", style: "color: {vm.color}", "{vm.icon}" }
                    span { class: "step-label", "{step_label}" }
                    button {
                        class: "link",
                        disabled: busy,
                        onclick: move |_| on_command.call(Command::Reset),
                        "↻ {reset_label}"
                    }
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "{progress_style}" }
                }
            }
            h3 { class: "question-text", "{vm.text}" }
            if !vm.examples.is_empty() {
                div { class: "examples",
                    p { class: "muted", "{examples_label}" }
                    div { class: "example-list",
                        for example in vm.examples.iter() {
                            span { class: "example-chip", "{example}" }
                        }
                    }
                }
            }
            if let Some(error) = vm.error.as_ref() {
                div { class: "error", role: "alert", "{error}" }
            }
            form {
                class: "answer-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    if busy {
                        return;
                    }
                    let Some(answer) = prepare_answer(&input.peek()) else {
                        return;
                    };
                    input.set(String::new());
                    on_command.call(Command::Submit(answer));
                },
                input {
                    r#type: "text",
                    value: "{input}",
                    placeholder: "{placeholder}",
                    disabled: busy,
                    oninput: move |evt: FormEvent| input.set(evt.value()),
                }
                VoiceButton {
                    disabled: busy,
                    language,
                    on_transcript: move |text: String| input.set(text),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: !can_send,
                    if busy { "…" } else { "➤" }
                }
            }
        }
    }
}

#[component]
fn SummaryPanel(vm: SummaryVm, language: Language, on_command: EventHandler<Command>) -> Element {
    let t = |key: &'static str| translate(language, key);
    let complete = t("assessment.complete");
    let urgency_label = t("assessment.urgency");
    let symptoms_label = t("assessment.symptoms_summary");
    let primary_label = t("assessment.primary");
    let duration_label = t("assessment.duration");
    let severity_label = t("assessment.severity");
    let additional_label = t("assessment.additional");
    let conditions_label = t("assessment.possible_conditions");
    let disclaimer_title = t("assessment.disclaimer");
    let disclaimer_text = t("assessment.disclaimer_text");
    let new_assessment = t("assessment.new_assessment");
    let match_label = t("assessment.match");

    rsx! {
        section { class: "assessment-summary",
            h2 { "✔ {complete}" }
            div { class: "urgency",
                span { "{urgency_label}: " }
                span {
                    class: "badge",
                    style: "background-color: {vm.urgency.color}",
                    "{vm.urgency.label}"
                }
            }
            div { class: "card",
                h4 { "{symptoms_label}" }
                dl { class: "summary-grid",
                    dt { "{primary_label}" }
                    dd { "{vm.primary_symptom}" }
                    dt { "{duration_label}" }
                    dd { "{vm.duration}" }
                    dt { "{severity_label}" }
                    dd {
                        span {
                            class: "badge",
                            style: "background-color: {vm.severity.color}",
                            "{vm.severity.label}"
                        }
                    }
                    if let Some(additional) = vm.additional_symptoms.as_ref() {
                        dt { "{additional_label}" }
                        dd { "{additional}" }
                    }
                }
            }
            if !vm.predictions.is_empty() {
                div { class: "card",
                    h4 { "{conditions_label}" }
                    ul { class: "predictions",
                        for prediction in vm.predictions.iter() {
                            li {
                                span { class: "condition", "{prediction.condition}" }
                                span { class: "match", "{prediction.match_percent}% {match_label}" }
                            }
                        }
                    }
                }
            }
            div { class: "disclaimer",
                h4 { "⚠ {disclaimer_title}" }
                p { "{disclaimer_text}" }
            }
            button {
                class: "primary",
                disabled: vm.busy,
                onclick: move |_| on_command.call(Command::Reset),
                "↻ {new_assessment}"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GuidedTestHandles {
    dispatch: Rc<RefCell<Option<Callback<Command>>>>,
}

#[cfg(test)]
impl GuidedTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<Command>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<Command> {
        (*self.dispatch.borrow()).expect("guided dispatch registered")
    }
}
