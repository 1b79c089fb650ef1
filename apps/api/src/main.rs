mod config;
mod errors;
mod llm_client;
mod quiz;
mod recommendation;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recommendation::resolver::{RecommendationBackend, RecommendationResolver};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log level is known
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ReadRite API v{}", env!("CARGO_PKG_VERSION"));

    // The API key is the only switch for the remote path
    let backend: Option<Arc<dyn RecommendationBackend>> = match &config.openrouter_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                config.openrouter_api_url.clone(),
                config.remote_timeout,
            )
            .context("Failed to build HTTP client for the LLM API")?;
            info!(
                "LLM client initialized (model: {}, timeout: {:?})",
                llm_client::MODEL,
                config.remote_timeout
            );
            Some(Arc::new(llm))
        }
        None => {
            info!("OPENROUTER_API_KEY not set, recommendations will use fallback bundles");
            None
        }
    };

    if let Some(dir) = &config.static_dir {
        info!("Serving front-end from {}", dir.display());
    }

    let cors = cors_layer(&config)?;

    // Build app state
    let state = AppState {
        resolver: Arc::new(RecommendationResolver::new(backend)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive when no origins are configured, otherwise an explicit allow list.
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    if config.cors_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("CORS restricted to {} origin(s)", origins.len());

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
