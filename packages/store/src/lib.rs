pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod profile;
pub mod settings;
pub mod state;

mod time;

pub use config::{ApiConfig, DraftlyConfig, GenerationConfig, GenerationMode};
pub use error::{ConfigError, GenerationError, MissingField, UploadError, ValidationError};
pub use generation::{
    generate, run_generation, GenerationRequest, GenerationService, PlaceholderGenerator,
};
pub use models::{SlideCard, Theme, UploadedFile, User};
pub use profile::{ImageSelection, ProfileDraft, MAX_IMAGE_BYTES};
pub use settings::PresentationSettings;
pub use state::{AppState, AuthPage, GenerationTicket, Page, View};
