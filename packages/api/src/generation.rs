//! Outline generation through the backend.

use store::{GenerationError, GenerationRequest, GenerationService, SlideCard};

use crate::client::BackendClient;

/// [`GenerationService`] that asks `POST /api/backend/presentation/outline`.
#[derive(Clone, Debug)]
pub struct HttpGenerationService {
    client: BackendClient,
}

impl HttpGenerationService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl GenerationService for HttpGenerationService {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<SlideCard>, GenerationError> {
        self.client
            .outline(request)
            .await
            .map_err(|e| GenerationError::Service(e.to_string()))
    }
}
