use std::sync::Arc;

use crate::scoring::ResumeScorer;
use crate::suggestions::SuggestionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Vocabulary and deny-list, built once at startup.
    pub scorer: Arc<ResumeScorer>,
    /// Pluggable suggestion backend. `None` when SUGGESTION_SERVICE_URL is unset.
    pub suggestions: Option<Arc<dyn SuggestionProvider>>,
}
