//! Recommendation Resolver — picks between the remote generator and the
//! deterministic fallback bundles.
//!
//! Flow: analyze → (backend configured?) remote call → on `Success` return it,
//! on `RateLimited` surface 429, on `Failed` fall back. No backend → fallback.
//!
//! The backend is fixed at construction. `None` is the "no API key" setup and is
//! never re-read from the environment at call time.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::recommendation::analyzer::analyze_answers;
use crate::recommendation::bundles::FallbackBundle;
use crate::recommendation::models::{QuizAnswer, RecommendationResult, BOOKS_PER_RESULT};
use crate::recommendation::prompts::{build_recommendation_prompt, RECOMMENDATION_SYSTEM};

// ────────────────────────────────────────────────────────────────────────────
// Remote backend seam
// ────────────────────────────────────────────────────────────────────────────

/// Result of one remote generation attempt.
#[derive(Debug)]
pub enum RemoteOutcome {
    Success(RecommendationResult),
    /// Upstream returned 429. Surfaced to the caller, never hidden by the fallback.
    RateLimited,
    /// Anything else: transport error, timeout, non-2xx, unparsable body.
    Failed(String),
}

/// A source of generated recommendations. Implement this to swap the remote
/// service without touching the resolver or the handlers.
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> RemoteOutcome;
}

#[async_trait]
impl RecommendationBackend for LlmClient {
    async fn generate(&self, prompt: &str) -> RemoteOutcome {
        match self
            .call_json::<RecommendationResult>(prompt, RECOMMENDATION_SYSTEM)
            .await
        {
            Ok(result) if result.has_expected_book_count() => RemoteOutcome::Success(result),
            Ok(result) => RemoteOutcome::Failed(format!(
                "expected {BOOKS_PER_RESULT} books, got {}",
                result.books.len()
            )),
            Err(LlmError::RateLimited) => RemoteOutcome::RateLimited,
            Err(e) => RemoteOutcome::Failed(e.to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolver
// ────────────────────────────────────────────────────────────────────────────

/// Which path produced a recommendation. Logged per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub result: RecommendationResult,
    pub source: RecommendationSource,
}

#[derive(Clone)]
pub struct RecommendationResolver {
    backend: Option<Arc<dyn RecommendationBackend>>,
}

impl RecommendationResolver {
    pub fn new(backend: Option<Arc<dyn RecommendationBackend>>) -> Self {
        Self { backend }
    }

    pub fn remote_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Resolves one quiz session into a recommendation.
    ///
    /// Errors only for invalid answers (`Validation`) and upstream throttling
    /// (`RateLimited`); every other remote failure degrades to the fallback.
    pub async fn resolve(&self, answers: &[QuizAnswer]) -> Result<Resolution, AppError> {
        let summary = analyze_answers(answers)?;

        let Some(backend) = &self.backend else {
            info!("No generative backend configured, using fallback bundles");
            return fallback_resolution(answers);
        };

        let prompt = build_recommendation_prompt(answers, &summary);

        match backend.generate(&prompt).await {
            RemoteOutcome::Success(result) => {
                info!("Remote recommendation: genre={:?}", result.genre);
                Ok(Resolution {
                    result,
                    source: RecommendationSource::Remote,
                })
            }
            RemoteOutcome::RateLimited => Err(AppError::RateLimited(
                "generative backend returned 429".to_string(),
            )),
            RemoteOutcome::Failed(reason) => {
                warn!("Remote recommendation failed, using fallback: {reason}");
                fallback_resolution(answers)
            }
        }
    }
}

fn fallback_resolution(answers: &[QuizAnswer]) -> Result<Resolution, AppError> {
    Ok(Resolution {
        result: fallback_recommendation(answers)?,
        source: RecommendationSource::Fallback,
    })
}

/// Deterministic recommendation from the static bundle table.
pub fn fallback_recommendation(answers: &[QuizAnswer]) -> Result<RecommendationResult, AppError> {
    let summary = analyze_answers(answers)?;
    let has_custom = answers.iter().any(|a| a.is_custom);
    let bundle = FallbackBundle::select(&summary, has_custom);
    info!(
        "Fallback bundle {:?} for traits [{}]",
        bundle.genre(),
        summary.dominant_traits.join(", ")
    );
    Ok(bundle.to_result())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::llm_client::tests::{completion, spawn_delayed_endpoint, spawn_stub_endpoint};
    use crate::recommendation::analyzer::tests::answer;
    use crate::recommendation::models::Book;
    use serde_json::json;

    /// Backend that replays a fixed outcome and counts calls.
    pub(crate) struct StubBackend {
        outcome: fn() -> RemoteOutcome,
        pub calls: AtomicUsize,
    }

    impl StubBackend {
        pub(crate) fn new(outcome: fn() -> RemoteOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RecommendationBackend for StubBackend {
        async fn generate(&self, _prompt: &str) -> RemoteOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    pub(crate) fn remote_result() -> RecommendationResult {
        RecommendationResult {
            genre: "Cozy Detective Scholar".to_string(),
            description: "You like a puzzle with your tea.".to_string(),
            books: (1..=3)
                .map(|i| Book {
                    title: format!("Remote Book {i}"),
                    author: "Remote Author".to_string(),
                    reason: "Because you said so.".to_string(),
                })
                .collect(),
        }
    }

    fn detective_answers() -> Vec<QuizAnswer> {
        vec![
            answer("A flawed but brilliant detective solving complex cases", 8, false),
            answer("Seek advice from trusted friends and family", 5, false),
        ]
    }

    #[tokio::test]
    async fn test_no_backend_uses_fallback() {
        let resolver = RecommendationResolver::new(None);
        assert!(!resolver.remote_enabled());
        let resolution = resolver.resolve(&detective_answers()).await.unwrap();
        assert_eq!(resolution.source, RecommendationSource::Fallback);
        assert_eq!(resolution.result.genre, "Mystery Mastermind");
        assert_eq!(resolution.result.books.len(), 3);
    }

    #[tokio::test]
    async fn test_remote_success_returned_directly() {
        let backend = Arc::new(StubBackend::new(|| RemoteOutcome::Success(remote_result())));
        let resolver = RecommendationResolver::new(Some(backend.clone()));
        let resolution = resolver.resolve(&detective_answers()).await.unwrap();
        assert_eq!(resolution.source, RecommendationSource::Remote);
        assert_eq!(resolution.result, remote_result());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_is_surfaced_not_hidden() {
        let backend = Arc::new(StubBackend::new(|| RemoteOutcome::RateLimited));
        let resolver = RecommendationResolver::new(Some(backend));
        let result = resolver.resolve(&detective_answers()).await;
        assert!(matches!(result, Err(AppError::RateLimited(_))));
    }

    #[tokio::test]
    async fn test_remote_failure_degrades_to_fallback() {
        let backend = Arc::new(StubBackend::new(|| {
            RemoteOutcome::Failed("status 500".to_string())
        }));
        let resolver = RecommendationResolver::new(Some(backend));
        let resolution = resolver.resolve(&detective_answers()).await.unwrap();
        assert_eq!(resolution.source, RecommendationSource::Fallback);
        assert_eq!(resolution.result.genre, "Mystery Mastermind");
    }

    #[tokio::test]
    async fn test_invalid_answers_never_reach_backend() {
        let backend = Arc::new(StubBackend::new(|| RemoteOutcome::Success(remote_result())));
        let resolver = RecommendationResolver::new(Some(backend.clone()));
        let result = resolver.resolve(&[]).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_all_custom_no_keywords_is_unique_literary_soul() {
        let answers: Vec<QuizAnswer> = ["Birdwatching", "Knitting", "Chess", "Baking bread"]
            .iter()
            .map(|t| answer(t, 6, true))
            .collect();
        let summary = analyze_answers(&answers).unwrap();
        assert_eq!(
            summary.personality_type,
            crate::recommendation::models::PersonalityType::Individualistic
        );
        let result = fallback_recommendation(&answers).unwrap();
        assert_eq!(result.genre, "Unique Literary Soul");
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let answers = vec![
            answer("Lost in a fantasy world with dragons and magic", 9, false),
            answer("Happy endings where love conquers all", 8, true),
        ];
        let first = fallback_recommendation(&answers).unwrap();
        assert_eq!(first.genre, "Fantasy Voyager");
        for _ in 0..5 {
            assert_eq!(fallback_recommendation(&answers).unwrap(), first);
        }
    }

    #[tokio::test]
    async fn test_llm_backend_maps_statuses_to_outcomes() {
        let good = serde_json::to_string(&remote_result()).unwrap();
        let cases = [
            (200, completion(&good), "success"),
            (429, json!({ "error": { "message": "quota" } }), "rate_limited"),
            (500, json!({ "error": { "message": "boom" } }), "failed"),
            (200, completion("not json at all"), "failed"),
        ];

        for (status, body, expected) in cases {
            let url = spawn_stub_endpoint(status, body).await;
            let client =
                LlmClient::new("sk-or-test".to_string(), url, Duration::from_secs(5)).unwrap();
            let outcome = client.generate("prompt").await;
            let label = match outcome {
                RemoteOutcome::Success(_) => "success",
                RemoteOutcome::RateLimited => "rate_limited",
                RemoteOutcome::Failed(_) => "failed",
            };
            assert_eq!(label, expected, "status {status}");
        }
    }

    #[tokio::test]
    async fn test_llm_backend_rejects_wrong_book_count() {
        let mut short = remote_result();
        short.books.pop();
        let body = completion(&serde_json::to_string(&short).unwrap());
        let url = spawn_stub_endpoint(200, body).await;
        let client = LlmClient::new("sk-or-test".to_string(), url, Duration::from_secs(5)).unwrap();
        assert!(matches!(client.generate("prompt").await, RemoteOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_remote_timeout_degrades_to_fallback() {
        let body = completion(&serde_json::to_string(&remote_result()).unwrap());
        let url = spawn_delayed_endpoint(Duration::from_secs(3), 200, body).await;
        let client =
            LlmClient::new("sk-or-test".to_string(), url, Duration::from_millis(300)).unwrap();

        match client.generate("prompt").await {
            RemoteOutcome::Failed(reason) => assert!(reason.contains("HTTP error"), "{reason}"),
            other => panic!("expected Failed on timeout, got {other:?}"),
        }

        let resolver = RecommendationResolver::new(Some(Arc::new(client)));
        let resolution = resolver.resolve(&detective_answers()).await.unwrap();
        assert_eq!(resolution.source, RecommendationSource::Fallback);
        assert_eq!(resolution.result.genre, "Mystery Mastermind");
    }
}
