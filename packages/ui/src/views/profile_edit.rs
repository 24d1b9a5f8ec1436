//! Profile editor: name, email and avatar image.

use api::submit_profile;
use dioxus::prelude::*;
use store::profile::validate_image;
use store::{ImageSelection, ProfileDraft};

use crate::app_state::{use_app_state, use_services};
use crate::components::{Button, ButtonVariant, FieldError, Input, Label};
use crate::icons::FaXmark;
use crate::user_menu::Avatar;
use crate::Icon;

#[component]
pub fn ProfileEditView() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let mut draft = use_signal(|| {
        state
            .peek()
            .user
            .as_ref()
            .map(ProfileDraft::from_user)
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);

    let handle_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let content_type = file.content_type();
        // Reject on the declared size and type before reading the bytes.
        if let Err(e) = validate_image(file.size(), content_type.as_deref()) {
            draft.write().error = Some(e.to_string());
            return;
        }
        match file.read_bytes().await {
            Ok(bytes) => {
                let image = ImageSelection {
                    name: file.name(),
                    content_type,
                    bytes: bytes.to_vec(),
                };
                if let Err(e) = draft.write().select_image(image) {
                    tracing::debug!("image rejected: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!("could not read {}: {}", file.name(), e);
                draft.write().error = Some(format!("Could not read {}", file.name()));
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = services.backend.clone();
        spawn(async move {
            let Some(user) = state.peek().user.clone() else {
                return;
            };
            saving.set(true);
            draft.write().error = None;
            let current = draft();
            let result = submit_profile(&backend, &user, &current).await;
            saving.set(false);
            match result {
                Ok(updated) => state.write().update_profile(updated),
                Err(e) => {
                    tracing::warn!("profile update failed: {}", e);
                    draft.write().error = Some(e.to_string());
                }
            }
        });
    };

    let current = draft();
    let has_new_image = current.image.is_some();

    rsx! {
        div {
            class: "page page-narrow",
            div {
                class: "profile-card",
                div {
                    class: "profile-card-header",
                    h2 { class: "page-title", "Edit profile" }
                    button {
                        class: "icon-button",
                        r#type: "button",
                        title: "Close",
                        onclick: move |_| state.write().close_profile_edit(),
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    }
                }

                form {
                    class: "profile-form",
                    onsubmit: handle_submit,

                    div {
                        class: "field",
                        Label { html_for: "profile-image", "Profile image" }
                        div {
                            class: "profile-image-row",
                            div {
                                class: "profile-image-preview",
                                Avatar { src: current.preview.clone(), name: current.name.clone(), size: 80 }
                                if has_new_image {
                                    button {
                                        class: "profile-image-remove",
                                        r#type: "button",
                                        title: "Remove image",
                                        onclick: move |_| draft.write().remove_image(),
                                        Icon { icon: FaXmark, width: 12, height: 12 }
                                    }
                                }
                            }
                            div {
                                input {
                                    id: "profile-image",
                                    r#type: "file",
                                    accept: "image/*",
                                    onchange: handle_image,
                                }
                                p { class: "field-hint", "JPG, PNG or GIF, up to 5 MB" }
                            }
                        }
                    }

                    div {
                        class: "field",
                        Label { html_for: "profile-name", "Name" }
                        Input {
                            id: "profile-name",
                            value: current.name.clone(),
                            oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                        }
                    }

                    div {
                        class: "field",
                        Label { html_for: "profile-email", "Email" }
                        Input {
                            id: "profile-email",
                            r#type: "email",
                            value: current.email.clone(),
                            oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                        }
                    }

                    FieldError { message: current.error.clone() }

                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| state.write().close_profile_edit(),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    }
}
