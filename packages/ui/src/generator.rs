//! The generation service picked from configuration.

use api::{BackendClient, HttpGenerationService};
use store::{
    GenerationConfig, GenerationError, GenerationMode, GenerationRequest, GenerationService,
    PlaceholderGenerator, SlideCard,
};

#[derive(Clone, Debug)]
pub enum ConfiguredGenerator {
    Placeholder(PlaceholderGenerator),
    Http(HttpGenerationService),
}

impl ConfiguredGenerator {
    pub fn from_config(config: &GenerationConfig, backend: &BackendClient) -> Self {
        match config.mode {
            GenerationMode::Placeholder => {
                Self::Placeholder(PlaceholderGenerator::new(config.delay()))
            }
            GenerationMode::Http => Self::Http(HttpGenerationService::new(backend.clone())),
        }
    }
}

impl GenerationService for ConfiguredGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<SlideCard>, GenerationError> {
        match self {
            Self::Placeholder(generator) => generator.generate(request).await,
            Self::Http(generator) => generator.generate(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{ApiConfig, Theme, UploadedFile};

    #[test]
    fn test_mode_selects_service() {
        let backend = BackendClient::new(&ApiConfig::default());
        let placeholder = ConfiguredGenerator::from_config(&GenerationConfig::default(), &backend);
        assert!(matches!(placeholder, ConfiguredGenerator::Placeholder(_)));

        let http = ConfiguredGenerator::from_config(
            &GenerationConfig {
                mode: GenerationMode::Http,
                ..GenerationConfig::default()
            },
            &backend,
        );
        assert!(matches!(http, ConfiguredGenerator::Http(_)));
    }

    #[tokio::test]
    async fn test_placeholder_mode_generates_cards() {
        let config = GenerationConfig {
            delay_ms: 0,
            ..GenerationConfig::default()
        };
        let generator =
            ConfiguredGenerator::from_config(&config, &BackendClient::new(&ApiConfig::default()));
        let request = GenerationRequest {
            title: "Q1 Review".to_string(),
            theme: Theme::Report,
            files: vec![UploadedFile::new("sales.pdf", vec![1])],
            slide_count: 2,
        };
        let cards = generator.generate(&request).await.unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].title, "Slide 2");
    }
}
