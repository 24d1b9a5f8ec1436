//! Step 1: pick the source documents.

use dioxus::prelude::*;
use store::{Page, UploadedFile};

use crate::app_state::use_app_state;
use crate::components::{Button, ButtonVariant, FieldError};
use crate::icons::{FaCloudArrowUp, FaFileLines};
use crate::Icon;

/// `accept` hint for the file picker. Not enforced.
pub const ACCEPTED_DOCUMENTS: &str = ".pdf,.doc,.docx,.hwp,.txt";

const FORMAT_BADGES: [&str; 4] = ["DOC", "PDF", "HWP", "TEXT"];

#[component]
pub fn UploadView() -> Element {
    let mut state = use_app_state();
    let files = state.read().files.clone();
    let can_continue = state.read().can_leave_upload();
    let mut read_error = use_signal(|| Option::<String>::None);

    // Each selection is appended; earlier picks stay in the list.
    let handle_select = move |evt: FormEvent| async move {
        let mut picked = Vec::new();
        let mut unread = Vec::new();
        for file in evt.files() {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => {
                    let mut upload = UploadedFile::new(name, bytes.to_vec());
                    if let Some(content_type) = file.content_type() {
                        upload = upload.with_content_type(content_type);
                    }
                    picked.push(upload);
                }
                Err(e) => {
                    tracing::warn!("could not read {}: {}", name, e);
                    unread.push(name);
                }
            }
        }
        read_error.set(unread_message(&unread));
        if !picked.is_empty() {
            tracing::debug!(count = picked.len(), "files selected");
            state.write().add_files(picked);
        }
    };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Upload your documents" }

            div {
                class: "dropzone",
                div {
                    class: "format-badges",
                    for format in FORMAT_BADGES {
                        span { key: "{format}", class: "format-badge", "{format}" }
                    }
                }
                Icon { icon: FaCloudArrowUp, width: 48, height: 48 }
                h2 { class: "dropzone-title", "Pick the files to build your presentation from" }
                p { class: "dropzone-hint", "PDF, Word, HWP and plain text documents" }
                input {
                    id: "file-upload",
                    class: "visually-hidden",
                    r#type: "file",
                    multiple: true,
                    accept: ACCEPTED_DOCUMENTS,
                    onchange: handle_select,
                }
                label {
                    class: "button button-primary",
                    r#for: "file-upload",
                    "Choose files"
                }
            }

            FieldError { message: read_error() }

            if !files.is_empty() {
                div {
                    class: "file-list",
                    h3 { "Uploaded files" }
                    div {
                        class: "file-grid",
                        for (index, file) in files.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: "file-item",
                                Icon { icon: FaFileLines, width: 18, height: 18 }
                                div {
                                    p { class: "file-name", "{file.name}" }
                                    p { class: "file-size", "{file.size_mib()} MB" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "page-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !can_continue,
                    onclick: move |_| state.write().navigate(Page::Settings),
                    "Next step"
                }
            }
        }
    }
}

/// Inline message naming the files that could not be read, if any.
fn unread_message(names: &[String]) -> Option<String> {
    match names {
        [] => None,
        [name] => Some(format!("Could not read {name}. Try selecting it again.")),
        _ => Some(format!(
            "Could not read {}. Try selecting them again.",
            names.join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_message() {
        assert_eq!(unread_message(&[]), None);
        assert_eq!(
            unread_message(&["q1.pdf".to_string()]).as_deref(),
            Some("Could not read q1.pdf. Try selecting it again.")
        );
        assert_eq!(
            unread_message(&["q1.pdf".to_string(), "notes.txt".to_string()]).as_deref(),
            Some("Could not read q1.pdf, notes.txt. Try selecting them again.")
        );
    }
}
