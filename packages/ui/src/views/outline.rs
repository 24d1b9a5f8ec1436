//! Step 3: the generated outline, one card per slide.

use dioxus::prelude::*;

use crate::app_state::use_app_state;
use crate::icons::FaPlus;
use crate::Icon;

#[component]
pub fn OutlineView() -> Element {
    let state = use_app_state();
    let cards = state.read().cards.clone();
    let total = cards.len();

    rsx! {
        div {
            class: "page",
            div {
                class: "outline",
                h1 { class: "page-title", "Outline" }

                div {
                    class: "outline-cards",
                    for (index, card) in cards.into_iter().enumerate() {
                        div {
                            key: "{card.id}",
                            class: "outline-card",
                            span { class: "outline-badge", "{index + 1}" }
                            div {
                                class: "outline-card-body",
                                h3 { "{card.title}" }
                                ul {
                                    for (line_index, line) in card.content.iter().enumerate() {
                                        li { key: "{line_index}", "{line}" }
                                    }
                                }
                            }
                        }
                    }

                    // Editing cards is not supported yet.
                    div {
                        class: "outline-card outline-card-add",
                        button {
                            r#type: "button",
                            disabled: true,
                            title: "Coming soon",
                            Icon { icon: FaPlus, width: 16, height: 16 }
                            span { "Add card" }
                        }
                    }
                }

                div {
                    class: "outline-footer",
                    span { "{total} cards total" }
                }
            }
        }
    }
}
