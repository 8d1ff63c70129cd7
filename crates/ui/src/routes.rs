use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ChatView, GuidedAssessmentView, LanguageSelector, use_ui_state};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", GuidedAssessmentView)] Guided {},
        #[route("/chat", ChatView)] Chat {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    let ui = use_ui_state();
    let title = ui.t("app.title");
    let subtitle = ui.t("app.subtitle");
    let guided = ui.t("mode.guided");
    let free = ui.t("mode.free");

    rsx! {
        header { class: "header",
            div { class: "brand",
                span { class: "brand-icon", "❤" }
                div {
                    h1 { "{title}" }
                    p { class: "muted", "{subtitle}" }
                }
            }
            div { class: "header-controls",
                LanguageSelector {}
                nav { class: "mode-toggle",
                    Link { to: Route::Guided {}, active_class: "active", "🩺 {guided}" }
                    Link { to: Route::Chat {}, active_class: "active", "💬 {free}" }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let ui = use_ui_state();
    let disclaimer = ui.t("disclaimer");
    let health = ui.t("footer.health");
    let consult = ui.t("footer.consult");

    rsx! {
        footer { class: "footer",
            p { class: "disclaimer-line", "{disclaimer}" }
            p { "{health}" }
            p { class: "muted", "{consult}" }
        }
    }
}
