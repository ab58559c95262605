//! Axum route handlers for the Summary API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::summary::generator::generate_profile_summary;
use crate::summary::models::{ExperienceLog, ProfileSummary, SCALE};
use crate::state::AppState;
use crate::validation::matcher::ReferenceRecord;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// The caller's snapshot of a user's logs. The same snapshot feeds the prompt
/// and the validation of the generated text.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub logs: Vec<ExperienceLog>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub records: Vec<ReferenceRecord>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub accepted: bool,
    /// Echoed exactly as received.
    pub text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/summaries
///
/// Generates a profile summary from the supplied logs and returns it only if it
/// passes validation.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<ProfileSummary>, AppError> {
    let summary = generate_profile_summary(
        state.llm.as_ref(),
        &state.validator,
        request.user_id,
        &request.logs,
    )
    .await?;

    Ok(Json(summary))
}

/// POST /api/v1/summaries/validate
///
/// Validates caller-supplied text against caller-supplied records. A null or
/// missing text is trivially accepted.
pub async fn handle_validate_summary(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    let (low, high) = (f64::from(*SCALE.start()), f64::from(*SCALE.end()));
    if let Some((i, record)) = request
        .records
        .iter()
        .enumerate()
        .find(|(_, r)| !(low..=high).contains(&r.rating))
    {
        return Err(AppError::Validation(format!(
            "records[{i}].rating must be between {low} and {high}, got {}",
            record.rating
        )));
    }

    state
        .validator
        .validate(request.text.as_deref().unwrap_or_default(), &request.records)?;

    Ok(Json(ValidateResponse {
        accepted: true,
        text: request.text,
    }))
}
