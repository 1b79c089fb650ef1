use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::resolver::RecommendationResolver;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RecommendationResolver>,
    pub config: Config,
}
