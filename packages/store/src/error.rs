//! Error taxonomy for client-side state transitions.
//!
//! Network failures live in the `api` crate; everything here is raised before
//! or around a request and never mutates state on the failing path.

use std::fmt;
use std::time::Duration;

/// A required input the generate action needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
    Title,
    Theme,
    Files,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MissingField::Title => "title",
            MissingField::Theme => "theme",
            MissingField::Files => "uploaded files",
        })
    }
}

/// Required form fields are missing. Blocks the action, no state mutation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Fill in every required field and upload at least one file (missing: {})", join(.missing))]
pub struct ValidationError {
    pub missing: Vec<MissingField>,
}

fn join(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A profile image was rejected before upload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Images must be 5 MB or smaller")]
    TooLarge { size: u64 },
    #[error("Only image files can be uploaded")]
    NotAnImage { content_type: Option<String> },
}

/// Generation could not start or did not produce an outline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A presentation is already being generated")]
    Busy,
    #[error("Generation timed out after {:?}", .0)]
    TimedOut(Duration),
    #[error("Generation failed: {0}")]
    Service(String),
    #[error("Generation returned no slides")]
    Empty,
    #[error("Generation returned {actual} of {expected} slides")]
    Incomplete { expected: u32, actual: u32 },
}

/// `draftly.toml` could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_missing_field() {
        let err = ValidationError {
            missing: vec![MissingField::Title, MissingField::Files],
        };
        assert_eq!(
            err.to_string(),
            "Fill in every required field and upload at least one file (missing: title, uploaded files)"
        );
    }

    #[test]
    fn test_invalid_generation_is_transparent() {
        let inner = ValidationError {
            missing: vec![MissingField::Theme],
        };
        let err = GenerationError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn test_timeout_message_keeps_sub_second_precision() {
        assert_eq!(
            GenerationError::TimedOut(Duration::from_millis(500)).to_string(),
            "Generation timed out after 500ms"
        );
        assert_eq!(
            GenerationError::TimedOut(Duration::from_secs(60)).to_string(),
            "Generation timed out after 60s"
        );
    }
}
