//! # Backend client
//!
//! [`BackendClient`] wraps a `reqwest::Client` and the configured base URL.
//! Every call follows the same shape: build the request, send it, turn a
//! non-2xx status into [`NetworkError::Rejected`] using the backend's error
//! body when it has one, then decode the JSON payload.
//!
//! On native targets the configured request timeout is applied to the client.
//! The browser `fetch` backend has no client-level timeout; generation runs
//! are bounded by the controller instead.

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use store::{ApiConfig, GenerationRequest, ImageSelection, SlideCard, User};

use crate::error::NetworkError;
use crate::models::{
    cards_from_outline, ErrorBody, ImageUploadResponse, LoginRequest, OutlineEnvelope,
    OutlineRequest, SignupRequest,
};

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &ApiConfig) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());
        let http = builder.build().unwrap_or_else(|e| {
            tracing::warn!("falling back to a default HTTP client: {}", e);
            reqwest::Client::new()
        });
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sign in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, NetworkError> {
        let response = self
            .http
            .post(self.url("/api/user/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        decode(response, "Login failed").await
    }

    /// Create an account. The backend answers with the new user record.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, NetworkError> {
        let response = self
            .http
            .post(self.url("/api/user/signup"))
            .json(&SignupRequest {
                name,
                email,
                password,
            })
            .send()
            .await?;
        decode(response, "Sign up failed").await
    }

    /// Upload a profile image and return the stored path.
    pub async fn upload_image(&self, image: &ImageSelection) -> Result<String, NetworkError> {
        let mut part = Part::bytes(image.bytes.clone()).file_name(image.name.clone());
        if let Some(mime) = &image.content_type {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().part("image", part);
        let response = self
            .http
            .post(self.url("/api/user/upload-image"))
            .multipart(form)
            .send()
            .await?;
        let uploaded: ImageUploadResponse = decode(response, "Image upload failed").await?;
        Ok(uploaded.image_path)
    }

    /// Replace the stored user record.
    pub async fn update_user(&self, user: &User) -> Result<(), NetworkError> {
        let response = self
            .http
            .put(self.url("/api/user/update"))
            .json(user)
            .send()
            .await?;
        ensure_success(response, "Profile update failed").await?;
        Ok(())
    }

    /// Ask the backend for a slide outline.
    pub async fn outline(&self, request: &GenerationRequest) -> Result<Vec<SlideCard>, NetworkError> {
        let response = self
            .http
            .post(self.url("/api/backend/presentation/outline"))
            .json(&OutlineRequest::from(request))
            .send()
            .await?;
        let status = response.status();
        let envelope: OutlineEnvelope = decode(response, "Outline generation failed").await?;
        if !envelope.success {
            return Err(NetworkError::Rejected {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "Outline generation failed".to_string()),
            });
        }
        Ok(cards_from_outline(envelope.data.unwrap_or_default()))
    }
}

async fn ensure_success(response: Response, fallback: &str) -> Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let err = rejection(status, &body, fallback);
    tracing::warn!(status = status.as_u16(), "backend rejected request: {}", err);
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, NetworkError> {
    let response = ensure_success(response, fallback).await?;
    Ok(response.json::<T>().await?)
}

/// Build the error for a non-2xx response from its status and raw body.
pub(crate) fn rejection(status: StatusCode, body: &str, fallback: &str) -> NetworkError {
    NetworkError::Rejected {
        status: status.as_u16(),
        message: ErrorBody::parse(body)
            .into_message()
            .unwrap_or_else(|| fallback.to_string()),
    }
}
