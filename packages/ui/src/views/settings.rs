//! Step 2: title, purpose and slide count, then generate.

use dioxus::prelude::*;
use store::{GenerationTicket, PresentationSettings, Theme};

use crate::app_state::use_app_state;
use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::{FaMinus, FaPlus, FaWandMagicSparkles};
use crate::notice::{use_notice, Notice};
use crate::Icon;

#[component]
pub fn SettingsView() -> Element {
    let mut state = use_app_state();
    let mut notice = use_notice();
    let worker = use_coroutine_handle::<GenerationTicket>();

    let settings = state.read().settings.clone();
    let generating = state.read().generating;
    let can_generate = state.read().can_generate();
    let theme_value = settings.theme.map(|t| t.as_str()).unwrap_or_default();
    let slide_count = settings.slide_count();

    let handle_generate = move |_| {
        let started = state.write().begin_generation();
        match started {
            Ok(ticket) => worker.send(ticket),
            Err(e) => notice.set(Notice::error(e.to_string())),
        }
    };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Presentation settings" }

            div {
                class: "settings-form",

                div {
                    class: "field",
                    Label { html_for: "presentation-title", "Title" }
                    Input {
                        id: "presentation-title",
                        placeholder: "e.g. Q1 Review",
                        value: settings.title.clone(),
                        oninput: move |evt: FormEvent| state.write().set_title(evt.value()),
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "presentation-theme", "Purpose" }
                    select {
                        id: "presentation-theme",
                        class: "input",
                        value: "{theme_value}",
                        onchange: move |evt: FormEvent| {
                            state.write().set_theme(Theme::from_value(&evt.value()));
                        },
                        option { value: "", selected: settings.theme.is_none(), "Choose a purpose" }
                        for theme in Theme::ALL {
                            option {
                                key: "{theme.as_str()}",
                                value: theme.as_str(),
                                selected: settings.theme == Some(theme),
                                "{theme.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "slide-count", "Number of slides" }
                    div {
                        class: "stepper",
                        Button {
                            variant: ButtonVariant::Outline,
                            title: "Fewer slides",
                            onclick: move |_| state.write().settings.decrement(),
                            Icon { icon: FaMinus, width: 12, height: 12 }
                        }
                        input {
                            id: "slide-count",
                            class: "input stepper-value",
                            r#type: "number",
                            min: "{PresentationSettings::MIN_SLIDES}",
                            max: "{PresentationSettings::MAX_SLIDES}",
                            value: "{slide_count}",
                            oninput: move |evt: FormEvent| {
                                state.write().settings.set_slide_count_input(&evt.value());
                            },
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            title: "More slides",
                            onclick: move |_| state.write().settings.increment(),
                            Icon { icon: FaPlus, width: 12, height: 12 }
                        }
                    }
                    p {
                        class: "field-hint",
                        "Between {PresentationSettings::MIN_SLIDES} and {PresentationSettings::MAX_SLIDES} slides"
                    }
                }
            }

            div {
                class: "page-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !can_generate,
                    onclick: handle_generate,
                    Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                    if generating { "Generating..." } else { "Generate outline" }
                }
            }
        }
    }
}
