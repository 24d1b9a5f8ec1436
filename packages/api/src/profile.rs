//! # Profile submit flow
//!
//! Saving the profile form takes up to two requests, strictly in order:
//!
//! 1. if a new image was picked, upload it and take the returned path as the
//!    avatar;
//! 2. send the full merged user record.
//!
//! A failure at step 1 means step 2 is never attempted. Either failure is
//! returned as a [`SubmitError`] for the form's error line, and the caller only
//! applies the new record on `Ok`.
//!
//! [`ProfileBackend`] is the seam between the flow and HTTP so the ordering
//! rules can be tested without a server; [`BackendClient`] is the real
//! implementation.

use std::future::Future;

use store::{ImageSelection, ProfileDraft, User};

use crate::client::BackendClient;
use crate::error::{NetworkError, SubmitError};

pub trait ProfileBackend {
    /// Store an image and return its path.
    fn upload_image(
        &self,
        image: &ImageSelection,
    ) -> impl Future<Output = Result<String, NetworkError>>;
    fn update_user(&self, user: &User) -> impl Future<Output = Result<(), NetworkError>>;
}

impl ProfileBackend for BackendClient {
    async fn upload_image(&self, image: &ImageSelection) -> Result<String, NetworkError> {
        BackendClient::upload_image(self, image).await
    }

    async fn update_user(&self, user: &User) -> Result<(), NetworkError> {
        BackendClient::update_user(self, user).await
    }
}

/// Save `draft` on top of `user`. Returns the record to hand to the session.
pub async fn submit_profile<B: ProfileBackend>(
    backend: &B,
    user: &User,
    draft: &ProfileDraft,
) -> Result<User, SubmitError> {
    let avatar = match &draft.image {
        Some(image) => Some(
            backend
                .upload_image(image)
                .await
                .map_err(SubmitError::Upload)?,
        ),
        None => user.avatar.clone(),
    };
    let updated = draft.merged_user(user, avatar);
    backend
        .update_user(&updated)
        .await
        .map_err(SubmitError::Update)?;
    tracing::info!(email = %updated.email, "profile updated");
    Ok(updated)
}
