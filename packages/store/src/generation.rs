//! # Outline generation: service seam and controller
//!
//! Generation is delegated to a [`GenerationService`]. The controller around it
//! ([`run_generation`], [`generate`]) owns the rules that hold no matter which
//! service is plugged in:
//!
//! - a run is raced against an optional timeout ([`GenerationError::TimedOut`]);
//! - an empty outline is an error ([`GenerationError::Empty`]), and so is one
//!   shorter than the requested slide count ([`GenerationError::Incomplete`]);
//! - the outline is cut to the requested slide count and renumbered `1..=n`,
//!   so the card count always equals the slide count and ids are contiguous.
//!
//! ## Services
//!
//! | Implementation | Where | Behaviour |
//! |----------------|-------|-----------|
//! | [`PlaceholderGenerator`] | here | Waits a fixed delay, then fabricates `slide_count` cards from the title index and theme. |
//! | `HttpGenerationService` | `api` crate | Calls the backend outline endpoint. |
//!
//! The trait uses return-position `impl Future` rather than boxing, like the
//! other async seams in the workspace, so services are picked statically.

use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};

use crate::error::GenerationError;
use crate::models::{SlideCard, Theme, UploadedFile};
use crate::state::AppState;
use crate::time::sleep;

/// Everything a generation service needs, captured after validation.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    /// Trimmed, non-empty title.
    pub title: String,
    pub theme: Theme,
    /// Non-empty set of source documents.
    pub files: Vec<UploadedFile>,
    /// Within `[1, 50]`.
    pub slide_count: u32,
}

/// Produces an ordered outline for a request.
pub trait GenerationService {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<Vec<SlideCard>, GenerationError>>;
}

/// Stand-in for a real generation backend: waits, then fabricates cards.
#[derive(Clone, Debug)]
pub struct PlaceholderGenerator {
    delay: Duration,
}

impl Default for PlaceholderGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

impl PlaceholderGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl GenerationService for PlaceholderGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<SlideCard>, GenerationError> {
        sleep(self.delay).await;
        Ok(placeholder_cards(request))
    }
}

/// `slide_count` cards titled by index, with three lines mentioning the theme.
pub fn placeholder_cards(request: &GenerationRequest) -> Vec<SlideCard> {
    (1..=request.slide_count)
        .map(|i| SlideCard {
            id: i,
            title: format!("Slide {i}"),
            content: vec![
                format!("Analysis of the uploaded files {i}-1"),
                format!("Theme: {} content {i}-2", request.theme),
                format!("Key point for the presentation purpose {i}-3"),
            ],
        })
        .collect()
}

/// Call `service`, enforce `timeout`, and normalise the outline.
pub async fn run_generation<S: GenerationService>(
    service: &S,
    request: &GenerationRequest,
    timeout: Option<Duration>,
) -> Result<Vec<SlideCard>, GenerationError> {
    let cards = match timeout {
        Some(limit) => {
            let work = std::pin::pin!(service.generate(request));
            let timer = std::pin::pin!(sleep(limit));
            match select(work, timer).await {
                Either::Left((result, _)) => result?,
                Either::Right(((), _)) => return Err(GenerationError::TimedOut(limit)),
            }
        }
        None => service.generate(request).await?,
    };
    if cards.is_empty() {
        return Err(GenerationError::Empty);
    }
    if cards.len() < request.slide_count as usize {
        return Err(GenerationError::Incomplete {
            expected: request.slide_count,
            actual: cards.len() as u32,
        });
    }
    Ok(normalise(cards, request.slide_count))
}

fn normalise(cards: Vec<SlideCard>, slide_count: u32) -> Vec<SlideCard> {
    cards
        .into_iter()
        .take(slide_count as usize)
        .zip(1..)
        .map(|(card, id)| SlideCard { id, ..card })
        .collect()
}

/// Run a whole generation against a plain [`AppState`]: validate, mark busy,
/// await the service, then store the result. The generating flag is cleared
/// on every path that set it.
///
/// The UI performs the same three steps across a `Signal` so that the state is
/// not borrowed across the await.
pub async fn generate<S: GenerationService>(
    state: &mut AppState,
    service: &S,
    timeout: Option<Duration>,
) -> Result<(), GenerationError> {
    let ticket = state.begin_generation()?;
    let result = run_generation(service, &ticket.request, timeout).await;
    state.finish_generation(ticket, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::state::Page;

    struct Failing;

    impl GenerationService for Failing {
        async fn generate(&self, _: &GenerationRequest) -> Result<Vec<SlideCard>, GenerationError> {
            Err(GenerationError::Service("backend unavailable".to_string()))
        }
    }

    /// Returns a fixed outline regardless of the request.
    struct Canned(Vec<SlideCard>);

    impl GenerationService for Canned {
        async fn generate(&self, _: &GenerationRequest) -> Result<Vec<SlideCard>, GenerationError> {
            Ok(self.0.clone())
        }
    }

    fn card(id: u32, title: &str) -> SlideCard {
        SlideCard {
            id,
            title: title.to_string(),
            content: vec![],
        }
    }

    fn ready_state(slides: i64) -> AppState {
        let mut state = AppState::initial();
        state.login(User::new("Kim", "kim@example.com"));
        state.add_files([
            UploadedFile::new("q1.pdf", vec![1; 2048]),
            UploadedFile::new("notes.txt", vec![2; 512]),
        ]);
        state.set_title("Q1 Review");
        state.set_theme(Some(Theme::Business));
        state.settings.set_slide_count(slides);
        state.navigate(Page::Settings);
        state
    }

    fn instant() -> PlaceholderGenerator {
        PlaceholderGenerator::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_end_to_end_generation() {
        let mut state = ready_state(3);
        generate(&mut state, &instant(), None).await.unwrap();

        assert_eq!(state.current_page, Page::Outline);
        assert!(!state.generating);
        assert_eq!(state.cards.len(), 3);
        let titles: Vec<_> = state.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Slide 1", "Slide 2", "Slide 3"]);
        assert_eq!(
            state.cards[1].content,
            [
                "Analysis of the uploaded files 2-1",
                "Theme: business content 2-2",
                "Key point for the presentation purpose 2-3",
            ]
        );
    }

    #[tokio::test]
    async fn test_every_slide_count_yields_contiguous_ids() {
        for count in 1..=50 {
            let mut state = ready_state(count);
            generate(&mut state, &instant(), None).await.unwrap();
            assert_eq!(state.cards.len(), count as usize);
            for (index, card) in state.cards.iter().enumerate() {
                assert_eq!(card.id as usize, index + 1);
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_input_changes_nothing() {
        let mut state = ready_state(3);
        state.set_title(" ");
        state.set_theme(None);
        let before = state.clone();

        let err = generate(&mut state, &instant(), None).await.unwrap_err();
        assert!(matches!(err, GenerationError::Invalid(_)));
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_service_failure_keeps_page_and_clears_flag() {
        let mut state = ready_state(3);
        let err = generate(&mut state, &Failing, None).await.unwrap_err();

        assert_eq!(err.to_string(), "Generation failed: backend unavailable");
        assert!(!state.generating);
        assert_eq!(state.current_page, Page::Settings);
        assert!(state.cards.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_clears_flag() {
        let mut state = ready_state(3);
        let slow = PlaceholderGenerator::new(Duration::from_secs(5));
        let err = generate(&mut state, &slow, Some(Duration::from_millis(10)))
            .await
            .unwrap_err();

        assert_eq!(err, GenerationError::TimedOut(Duration::from_millis(10)));
        assert!(!state.generating);
        assert_eq!(state.current_page, Page::Settings);
    }

    #[tokio::test]
    async fn test_outline_is_renumbered_and_capped() {
        let state = ready_state(2);
        let request = state.validate().unwrap();
        let service = Canned(vec![card(7, "Intro"), card(9, "Body"), card(11, "Outro")]);

        let cards = run_generation(&service, &request, None).await.unwrap();
        let ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(cards[0].title, "Intro");
    }

    #[tokio::test]
    async fn test_empty_outline_is_an_error() {
        let state = ready_state(2);
        let request = state.validate().unwrap();
        let err = run_generation(&Canned(vec![]), &request, None)
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::Empty);
    }

    #[tokio::test]
    async fn test_short_outline_is_rejected() {
        let mut state = ready_state(3);
        let err = generate(&mut state, &Canned(vec![card(1, "Only")]), None)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::Incomplete {
                expected: 3,
                actual: 1
            }
        );
        assert_eq!(err.to_string(), "Generation returned 1 of 3 slides");
        assert!(!state.generating);
        assert_eq!(state.current_page, Page::Settings);
        assert!(state.cards.is_empty());
    }

    #[tokio::test]
    async fn test_stale_run_does_not_hold_up_next_session() {
        let mut state = ready_state(2);
        let stale = state.begin_generation().unwrap();
        state.logout();

        state.login(User::new("Lee", "lee@example.com"));
        state.add_files([UploadedFile::new("plan.txt", vec![3; 64])]);
        state.set_title("Roadmap");
        state.set_theme(Some(Theme::Report));
        state.settings.set_slide_count(3);
        let fresh = state.begin_generation().unwrap();

        let slow = PlaceholderGenerator::new(Duration::from_secs(5));
        let fast = instant();
        let (stale_request, fresh_request) = (stale.request.clone(), fresh.request.clone());
        let stale_run = Box::pin(run_generation(&slow, &stale_request, None));
        let fresh_run = Box::pin(run_generation(&fast, &fresh_request, None));

        let stale_run = match select(stale_run, fresh_run).await {
            Either::Right((result, stale_run)) => {
                state.finish_generation(fresh, result).unwrap();
                stale_run
            }
            Either::Left(_) => panic!("stale run finished before the fresh one"),
        };
        assert_eq!(state.current_page, Page::Outline);
        assert_eq!(state.cards.len(), 3);
        assert!(!state.generating);
        let cards = state.cards.clone();

        // Once the stale run does land it is dropped.
        drop(stale_run);
        let late = placeholder_cards(&stale_request);
        state.finish_generation(stale, Ok(late)).unwrap();
        assert_eq!(state.cards, cards);
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Lee"));
    }

    #[tokio::test]
    async fn test_regeneration_replaces_cards() {
        let mut state = ready_state(4);
        generate(&mut state, &instant(), None).await.unwrap();
        assert_eq!(state.cards.len(), 4);

        state.navigate(Page::Settings);
        state.settings.set_slide_count(2);
        generate(&mut state, &instant(), None).await.unwrap();
        assert_eq!(state.cards.len(), 2);
    }
}
