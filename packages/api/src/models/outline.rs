use serde::{Deserialize, Serialize};
use store::{GenerationRequest, SlideCard};

/// Body of `POST /api/backend/presentation/outline`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRequest {
    pub topic: String,
    pub slide_count: u32,
    pub description: String,
    pub presentation_style: String,
}

impl From<&GenerationRequest> for OutlineRequest {
    fn from(request: &GenerationRequest) -> Self {
        let sources = request
            .files
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            topic: request.title.clone(),
            slide_count: request.slide_count,
            description: format!("Source documents: {sources}"),
            presentation_style: request.theme.as_str().to_string(),
        }
    }
}

/// Response envelope of the presentation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<OutlineSlide>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutlineSlide {
    #[serde(default)]
    pub slide_number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub bullet_points: Option<Vec<String>>,
}

/// Map backend slides to cards, ordered by slide number and renumbered from 1.
/// Bullet points win over free-text content, which is split into lines.
pub fn cards_from_outline(mut slides: Vec<OutlineSlide>) -> Vec<SlideCard> {
    slides.sort_by_key(|s| s.slide_number);
    slides
        .into_iter()
        .zip(1..)
        .map(|(slide, id)| {
            let content = match slide.bullet_points {
                Some(points) if !points.is_empty() => points,
                _ => slide
                    .content
                    .unwrap_or_default()
                    .lines()
                    .map(|l| l.trim().trim_start_matches(['-', '*']).trim().to_string())
                    .filter(|l| !l.is_empty())
                    .collect(),
            };
            SlideCard {
                id,
                title: slide.title,
                content,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Theme, UploadedFile};

    #[test]
    fn test_request_from_generation_request() {
        let request = GenerationRequest {
            title: "Q1 Review".to_string(),
            theme: Theme::Business,
            files: vec![
                UploadedFile::new("sales.pdf", vec![]),
                UploadedFile::new("notes.txt", vec![]),
            ],
            slide_count: 3,
        };
        let body = serde_json::to_value(OutlineRequest::from(&request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "topic": "Q1 Review",
                "slideCount": 3,
                "description": "Source documents: sales.pdf, notes.txt",
                "presentationStyle": "business",
            })
        );
    }

    #[test]
    fn test_cards_from_outline() {
        let envelope: OutlineEnvelope = serde_json::from_str(
            r#"{
                "success": true,
                "message": "ok",
                "data": [
                    {"slideNumber": 2, "title": "Numbers", "content": "- Revenue up\n- Costs flat\n"},
                    {"slideNumber": 1, "title": "Intro", "content": "ignored", "bulletPoints": ["Why", "What"]}
                ]
            }"#,
        )
        .unwrap();
        let cards = cards_from_outline(envelope.data.unwrap());

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, 1);
        assert_eq!(cards[0].title, "Intro");
        assert_eq!(cards[0].content, ["Why", "What"]);
        assert_eq!(cards[1].id, 2);
        assert_eq!(cards[1].content, ["Revenue up", "Costs flat"]);
    }
}
