//! Blocking notices shown over the page, for failures the user must
//! acknowledge (validation, generation errors).

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notice {
    pub message: Option<String>,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

pub(crate) fn use_notice_provider() -> Signal<Notice> {
    let notice = use_signal(Notice::default);
    use_context_provider(|| notice)
}

pub fn use_notice() -> Signal<Notice> {
    use_context::<Signal<Notice>>()
}

/// A full-screen overlay with the current notice in a card.
/// Clicking outside the card or the button dismisses it.
#[component]
pub fn NoticeOverlay() -> Element {
    let mut notice = use_notice();
    let Some(message) = notice().message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "notice-overlay",
            onclick: move |_| notice.set(Notice::default()),
            div {
                class: "notice-card",
                role: "alertdialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                p { class: "notice-message", "{message}" }
                div {
                    class: "notice-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| notice.set(Notice::default()),
                        "OK"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_error_carries_message() {
        assert_eq!(Notice::default().message, None);
        let notice = Notice::error("Generation failed: backend down");
        assert_eq!(notice.message.as_deref(), Some("Generation failed: backend down"));
    }
}
