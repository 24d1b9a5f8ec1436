//! Wire bodies exchanged with the backend.

mod auth;
mod outline;

pub use auth::{ErrorBody, ImageUploadResponse, LoginRequest, SignupRequest};
pub use outline::{cards_from_outline, OutlineEnvelope, OutlineRequest, OutlineSlide};
