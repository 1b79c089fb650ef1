// Recommendation engine: trait analysis of quiz answers, remote generation,
// and the static fallback bundles.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod analyzer;
pub mod bundles;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod resolver;
