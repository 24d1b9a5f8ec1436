//! Network error types.

/// A request to the backend failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The backend answered with a non-2xx status. `message` is the backend's
    /// own `error` text when it sent one.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Could not reach the server: {0}")]
    Transport(String),
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            NetworkError::Decode(e.to_string())
        } else {
            NetworkError::Transport(e.to_string())
        }
    }
}

/// The profile form could not be saved. Tells which of the two requests failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Image upload failed: {0}")]
    Upload(NetworkError),
    #[error("{0}")]
    Update(NetworkError),
}
