use std::sync::Arc;

use crate::insights::generator::InsightGenerator;
use crate::llm_client::LlmClient;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub llm: LlmClient,
    /// Pluggable insight source. Production wires the Gemini-backed
    /// generator; tests substitute doubles.
    pub insight_generator: Arc<dyn InsightGenerator>,
}
