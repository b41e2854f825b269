//! Suggestion collaborator: trait-based access to the external
//! service that turns a scored resume into improvement suggestions.
//!
//! `AppState` holds an `Option<Arc<dyn SuggestionProvider>>`; `None` when no
//! service URL is configured.

pub mod client;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::resume::ParsedResume;

pub const DEFAULT_REQUEST_TYPE: &str = "comprehensive";
pub const FOCUS_AREAS: &[&str] = &["skills", "experience", "ats_optimization", "content_quality"];

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<SuggestionError>,
    },

    #[error("Suggestion service returned an empty body")]
    EmptyBody,
}

/// Payload sent to the suggestion service.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionRequest<'a> {
    pub resume_data: &'a ParsedResume,
    pub current_score: u32,
    pub request_type: &'a str,
    pub focus_areas: &'static [&'static str],
}

impl<'a> SuggestionRequest<'a> {
    pub fn new(resume: &'a ParsedResume, current_score: u32, request_type: &'a str) -> Self {
        Self {
            resume_data: resume,
            current_score,
            request_type,
            focus_areas: FOCUS_AREAS,
        }
    }
}

/// Implement this to swap the suggestion backend without touching handlers.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Returns the service's suggestions object, uninterpreted.
    async fn suggest(&self, request: &SuggestionRequest<'_>) -> Result<Value, SuggestionError>;
}
