//! # Domain models for a Draftly session
//!
//! The plain data carried by [`crate::AppState`]. Everything here is owned,
//! cloneable, and comparable so it can live inside a Dioxus `Signal` and be
//! diffed cheaply on re-render.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The signed-in account as returned by the backend (`id`, `name`, `email`, `avatar`). Serialises to the backend's JSON shape. |
//! | [`UploadedFile`] | A source document picked on the upload page: name, byte size, declared MIME type, and the raw bytes. |
//! | [`Theme`] | The presentation purpose chosen on the settings page. |
//! | [`SlideCard`] | One generated outline entry: 1-based `id`, `title`, and ordered `content` lines. |

use std::sync::Arc;

use serde::{Deserialize, Serialize};

const MIB: f64 = 1024.0 * 1024.0;

/// The authenticated account, as exchanged with the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend primary key; absent for records that never round-tripped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    /// Path or URL of the profile image.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Name shown in the header, falling back to the email when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A document attached on the upload page.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    /// Size in bytes as reported by the browser.
    pub size: u64,
    pub content_type: Option<String>,
    pub content: Arc<Vec<u8>>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: content.len() as u64,
            content_type: None,
            content: Arc::new(content),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Size in mebibytes, formatted with two decimals (`"1.50"`).
    pub fn size_mib(&self) -> String {
        format!("{:.2}", self.size as f64 / MIB)
    }
}

/// Presentation purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Business,
    Education,
    Marketing,
    Report,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::Business,
        Theme::Education,
        Theme::Marketing,
        Theme::Report,
    ];

    /// Stable identifier used in form values and backend requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Business => "business",
            Theme::Education => "education",
            Theme::Marketing => "marketing",
            Theme::Report => "report",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Business => "Business presentation",
            Theme::Education => "Educational presentation",
            Theme::Marketing => "Marketing presentation",
            Theme::Report => "Report presentation",
        }
    }

    /// Parse a form value. The empty string and unknown values mean "unset".
    pub fn from_value(value: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a generated outline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideCard {
    /// 1-based position in the outline.
    pub id: u32,
    pub title: String,
    pub content: Vec<String>,
}
