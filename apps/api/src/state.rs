use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::validation::SummaryValidator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generation provider. `LlmClient` in production, a scripted double in tests.
    pub llm: Arc<dyn TextGenerator>,
    /// Stateless; one instance serves every request.
    pub validator: Arc<SummaryValidator>,
}
