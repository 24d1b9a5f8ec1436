use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

/// Inline error line under a form. Renders nothing without a message.
#[component]
pub fn FieldError(#[props(!optional)] message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div { class: "field-error", role: "alert", "{message}" }
        }
    }
}
