//! # Profile editor draft
//!
//! [`ProfileDraft`] is the local, unsaved copy of the profile form: edited
//! name and email, an optional newly selected avatar image, the preview shown
//! next to the picker, and the field-level error line.
//!
//! Image selection is validated before anything is kept:
//!
//! - larger than [`MAX_IMAGE_BYTES`] (5 MiB) → [`UploadError::TooLarge`]
//! - declared type not `image/*` → [`UploadError::NotAnImage`]
//!
//! A rejected selection only sets the error line; the previously accepted image
//! and its preview stay as they were. Network submission lives in the `api`
//! crate, which reads the draft through [`ProfileDraft::merged_user`].

use base64::Engine;

use crate::error::UploadError;
use crate::models::User;

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// An image picked in the profile editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSelection {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageSelection {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// `data:` URL suitable for an `img` preview.
    pub fn data_url(&self) -> String {
        let mime = self.content_type.as_deref().unwrap_or("image/*");
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{mime};base64,{encoded}")
    }
}

/// Check the declared size and type of a candidate avatar.
pub fn validate_image(size: u64, content_type: Option<&str>) -> Result<(), UploadError> {
    if size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge { size });
    }
    match content_type {
        Some(mime) if mime.starts_with("image/") => Ok(()),
        other => Err(UploadError::NotAnImage {
            content_type: other.map(str::to_string),
        }),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub image: Option<ImageSelection>,
    /// What the avatar slot shows: a data URL for a fresh selection, otherwise
    /// the stored avatar.
    pub preview: Option<String>,
    pub error: Option<String>,
    stored_avatar: Option<String>,
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            image: None,
            preview: user.avatar.clone(),
            error: None,
            stored_avatar: user.avatar.clone(),
        }
    }

    /// Accept or reject a newly picked image. Rejection records the message in
    /// [`ProfileDraft::error`] and leaves the current image and preview alone.
    pub fn select_image(&mut self, image: ImageSelection) -> Result<(), UploadError> {
        if let Err(e) = validate_image(image.size(), image.content_type.as_deref()) {
            self.error = Some(e.to_string());
            return Err(e);
        }
        self.preview = Some(image.data_url());
        self.image = Some(image);
        self.error = None;
        Ok(())
    }

    /// Drop the pending image and show the stored avatar again.
    pub fn remove_image(&mut self) {
        self.image = None;
        self.preview = self.stored_avatar.clone();
    }

    /// The record to submit: `base` with the edited fields and `avatar`.
    pub fn merged_user(&self, base: &User, avatar: Option<String>) -> User {
        User {
            name: self.name.clone(),
            email: self.email.clone(),
            avatar,
            ..base.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(len: usize) -> ImageSelection {
        ImageSelection {
            name: "me.png".to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![0x89; len],
        }
    }

    fn user() -> User {
        User {
            id: Some(3),
            name: "Kim".to_string(),
            email: "kim@example.com".to_string(),
            avatar: Some("/uploads/old.png".to_string()),
        }
    }

    #[test]
    fn test_draft_starts_from_user() {
        let draft = ProfileDraft::from_user(&user());
        assert_eq!(draft.name, "Kim");
        assert_eq!(draft.preview.as_deref(), Some("/uploads/old.png"));
        assert!(draft.image.is_none());
        assert!(draft.error.is_none());
    }

    #[test]
    fn test_accepts_small_image() {
        let mut draft = ProfileDraft::from_user(&user());
        draft.select_image(png(16)).unwrap();
        assert!(draft.image.is_some());
        assert!(draft
            .preview
            .as_deref()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_rejects_six_mebibyte_image() {
        let mut draft = ProfileDraft::from_user(&user());
        draft.select_image(png(16)).unwrap();
        let before = draft.preview.clone();

        let err = draft.select_image(png(6 * 1024 * 1024)).unwrap_err();
        assert!(matches!(err, UploadError::TooLarge { .. }));
        assert_eq!(draft.preview, before);
        assert_eq!(draft.image.as_ref().map(|i| i.size()), Some(16));
        assert_eq!(draft.error.as_deref(), Some("Images must be 5 MB or smaller"));
    }

    #[test]
    fn test_rejects_non_image_type() {
        let mut draft = ProfileDraft::from_user(&user());
        let pdf = ImageSelection {
            name: "cv.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            bytes: vec![1; 32],
        };
        let err = draft.select_image(pdf).unwrap_err();
        assert!(matches!(err, UploadError::NotAnImage { .. }));
        assert_eq!(draft.preview.as_deref(), Some("/uploads/old.png"));
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_exact_limit_is_allowed() {
        assert!(validate_image(MAX_IMAGE_BYTES, Some("image/jpeg")).is_ok());
        assert!(validate_image(MAX_IMAGE_BYTES + 1, Some("image/jpeg")).is_err());
        assert!(validate_image(10, None).is_err());
    }

    #[test]
    fn test_accepting_clears_previous_error() {
        let mut draft = ProfileDraft::from_user(&user());
        let _ = draft.select_image(png(6 * 1024 * 1024));
        assert!(draft.error.is_some());
        draft.select_image(png(8)).unwrap();
        assert!(draft.error.is_none());
    }

    #[test]
    fn test_remove_image_restores_stored_avatar() {
        let mut draft = ProfileDraft::from_user(&user());
        draft.select_image(png(8)).unwrap();
        draft.remove_image();
        assert!(draft.image.is_none());
        assert_eq!(draft.preview.as_deref(), Some("/uploads/old.png"));
    }

    #[test]
    fn test_merged_user_keeps_id() {
        let mut draft = ProfileDraft::from_user(&user());
        draft.name = "Kim Lee".to_string();
        let merged = draft.merged_user(&user(), Some("/uploads/new.png".to_string()));
        assert_eq!(merged.id, Some(3));
        assert_eq!(merged.name, "Kim Lee");
        assert_eq!(merged.email, "kim@example.com");
        assert_eq!(merged.avatar.as_deref(), Some("/uploads/new.png"));
    }
}
