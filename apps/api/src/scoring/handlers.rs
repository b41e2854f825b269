//! Axum route handlers for the Scoring API.

use anyhow::Context;
use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::StoredAnalysis;
use crate::models::resume::ParsedResume;
use crate::scoring::grade::ScoreGrade;
use crate::scoring::sections::ScoreResult;
use crate::suggestions::{SuggestionRequest, DEFAULT_REQUEST_TYPE};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume: Option<ParsedResume>,
    #[serde(default)]
    pub parse_duration_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub analysis_id: Uuid,
    pub result: ScoreResult,
    pub grade: ScoreGrade,
    pub summary: &'static str,
    pub canonical_skills: Vec<String>,
    pub record: StoredAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct CanonicalizeRequest {
    #[serde(default)]
    pub skills: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct CanonicalizeResponse {
    pub skills: Vec<String>,
    pub points: u32,
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub resume: Option<ParsedResume>,
    #[serde(default)]
    pub request_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub current_score: u32,
    pub grade: ScoreGrade,
    pub suggestions: Value,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/score
///
/// Scores a parsed resume and returns the result plus the record to persist.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let resume = request
        .resume
        .ok_or_else(|| AppError::Validation("resume is required".to_string()))?;
    let analysis_id = Uuid::new_v4();
    let (result, canonical_skills) = state.scorer.score_with_skills(&resume);
    let grade = ScoreGrade::from_score(result.score);

    let analysis =
        serde_json::to_value(&resume).context("Failed to serialize parsed resume")?;
    let record = StoredAnalysis::new(analysis, &result, request.parse_duration_ms, Utc::now());

    info!(
        "Scored resume {analysis_id}: score={} grade={} penalties={}",
        result.score,
        grade.label(),
        result.penalties.len()
    );

    Ok(Json(ScoreResponse {
        analysis_id,
        result,
        grade,
        summary: grade.summary(),
        canonical_skills,
        record,
    }))
}

/// POST /api/v1/resumes/skills/canonicalize
///
/// Canonicalizes a raw skill list and reports its weighted skills sub-score.
/// Non-string entries are skipped.
pub async fn handle_canonicalize(
    State(state): State<AppState>,
    Json(request): Json<CanonicalizeRequest>,
) -> Result<Json<CanonicalizeResponse>, AppError> {
    let raw: Vec<&str> = request.skills.iter().filter_map(Value::as_str).collect();
    let skills = state.scorer.canonicalize(&raw);
    let score = state.scorer.score_skills(&skills);

    Ok(Json(CanonicalizeResponse {
        skills,
        points: score.points,
        note: score.note,
    }))
}

/// POST /api/v1/resumes/suggestions
///
/// Scores the resume, then forwards it with `current_score` to the suggestion service.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let resume = request
        .resume
        .ok_or_else(|| AppError::Validation("resume is required".to_string()))?;
    let provider = state
        .suggestions
        .as_ref()
        .ok_or(AppError::SuggestionsDisabled)?;

    let request_type = match request.request_type.as_deref().map(str::trim) {
        None => DEFAULT_REQUEST_TYPE,
        Some("") => {
            return Err(AppError::Validation(
                "request_type cannot be empty".to_string(),
            ))
        }
        Some(t) => t,
    };

    let current_score = state.scorer.score(&resume).score;
    let suggestions = provider
        .suggest(&SuggestionRequest::new(&resume, current_score, request_type))
        .await?;

    info!("Fetched suggestions for resume scored {current_score} ({request_type})");

    Ok(Json(SuggestionsResponse {
        current_score,
        grade: ScoreGrade::from_score(current_score),
        suggestions,
    }))
}
