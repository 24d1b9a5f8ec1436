//! Email/password sign-in form.

use api::LoginForm;
use dioxus::prelude::*;

use crate::app_state::{use_app_state, use_services};
use crate::components::{Button, ButtonVariant, FieldError, Input};

#[component]
pub fn LoginView() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = services.backend.clone();
        spawn(async move {
            error.set(None);

            let form = LoginForm {
                email: email().trim().to_string(),
                password: password(),
            };
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);
            let result = backend.login(&form.email, &form.password).await;
            loading.set(false);
            match result {
                Ok(user) => state.write().login(user),
                Err(e) => {
                    tracing::warn!("login failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Sign in to Draftly" }
            p { class: "auth-subtitle", "Turn your documents into a presentation outline." }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                FieldError { message: error() }

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
                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "No account yet? "
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| state.write().show_signup(),
                    "Sign up"
                }
            }
        }
    }
}
