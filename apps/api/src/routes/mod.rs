pub mod health;

use std::any::Any;

use axum::{
    http::Uri,
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
};

use crate::errors::AppError;
use crate::quiz::handlers::handle_list_questions;
use crate::recommendation::handlers::handle_recommend;
use crate::state::AppState;

async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No API route for {}", uri.path()))
}

/// Turns a handler panic into the same 500 body as `AppError::Internal`.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/questions", get(handle_list_questions))
        .route("/api/recommend", post(handle_recommend))
        .route("/api", any(api_not_found))
        .route("/api/*rest", any(api_not_found))
        .with_state(state);

    // Single-page app: any non-API path that isn't a file gets index.html.
    let router = match static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router.layer(CatchPanicLayer::custom(panic_response))
}
