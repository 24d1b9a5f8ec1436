//! # API crate: HTTP client for the Draftly backend
//!
//! Everything the web client sends over the network goes through this crate.
//! It owns the wire types, the `reqwest` client, and the two request flows that
//! have ordering rules (profile submit, outline generation). The backend itself
//! is an external service and is not part of this workspace.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Local checks for the login and signup forms before any request is made |
//! | [`client`] | [`BackendClient`]: base URL handling, JSON/multipart requests, error-body decoding |
//! | [`error`] | [`NetworkError`] and [`SubmitError`] |
//! | [`generation`] | [`HttpGenerationService`], a `store::GenerationService` backed by the outline endpoint |
//! | [`models`] | Request and response bodies as the backend spells them |
//! | [`profile`] | The [`ProfileBackend`] seam and the upload-then-update [`submit_profile`] flow |
//!
//! ## Endpoints
//!
//! | Method | Path | Used by |
//! |--------|------|---------|
//! | `POST` | `/api/user/login` | [`BackendClient::login`] |
//! | `POST` | `/api/user/signup` | [`BackendClient::signup`] |
//! | `POST` | `/api/user/upload-image` | [`BackendClient::upload_image`] (multipart field `image`) |
//! | `PUT` | `/api/user/update` | [`BackendClient::update_user`] |
//! | `POST` | `/api/backend/presentation/outline` | [`BackendClient::outline`] |

pub mod auth;
pub mod client;
pub mod error;
pub mod generation;
pub mod models;
pub mod profile;

pub use auth::{FormError, LoginForm, SignupForm};
pub use client::BackendClient;
pub use error::{NetworkError, SubmitError};
pub use generation::HttpGenerationService;
pub use profile::{submit_profile, ProfileBackend};
