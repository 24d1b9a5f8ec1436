//! Account creation form.

use api::SignupForm;
use dioxus::prelude::*;

use crate::app_state::{use_app_state, use_services};
use crate::components::{Button, ButtonVariant, FieldError, Input};

#[component]
pub fn SignupView() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = services.backend.clone();
        spawn(async move {
            error.set(None);

            let form = SignupForm {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                confirm_password: confirm_password(),
            };
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);
            let result = backend.signup(&form.name, &form.email, &form.password).await;
            loading.set(false);
            match result {
                Ok(user) => state.write().signup(user),
                Err(e) => {
                    tracing::warn!("sign up failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Create your account" }
            p { class: "auth-subtitle", "Sign up for Draftly" }

            form {
                class: "auth-form",
                onsubmit: handle_signup,

                FieldError { message: error() }

                Input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                Input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| state.write().show_login(),
                    "Sign in"
                }
            }
        }
    }
}
