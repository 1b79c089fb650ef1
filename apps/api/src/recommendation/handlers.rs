//! Axum route handlers for the Recommendation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommendation::models::{RecommendRequest, RecommendationResult};
use crate::state::AppState;

/// POST /api/recommend
///
/// Takes the full answer sequence of one quiz session and returns a genre with
/// three books. A malformed body (missing `answers`, wrong type) is a 400.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendationResult>, AppError> {
    let Json(request) = payload?;

    let span = tracing::info_span!(
        "recommend",
        request_id = %Uuid::new_v4(),
        answers = request.answers.len()
    );

    async move {
        let resolution = state.resolver.resolve(&request.answers).await?;
        info!(
            "Recommendation served: source={:?} genre={:?}",
            resolution.source, resolution.result.genre
        );
        Ok::<_, AppError>(Json(resolution.result))
    }
    .instrument(span)
    .await
}
