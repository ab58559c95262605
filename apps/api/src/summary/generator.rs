//! Profile summary generation.
//!
//! Flow: check logs → compute stats → build prompt → generate → validate against
//! the same log snapshot → return.
//!
//! The text is shown to the user only if validation passes. A failed validation is
//! surfaced as an error; generation is never retried automatically.

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::{FORMAT_INSTRUCTION, GROUNDING_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::summary::models::{ExperienceLog, ProfileStats, ProfileSummary, SCALE};
use crate::summary::prompts::SUMMARY_PROMPT_TEMPLATE;
use crate::validation::matcher::ReferenceRecord;
use crate::validation::SummaryValidator;

/// Number of logs quoted verbatim in the prompt.
const RECENT_LOG_LIMIT: usize = 5;

/// Generates and validates a profile summary for `user_id` from a snapshot of their logs.
pub async fn generate_profile_summary(
    llm: &dyn TextGenerator,
    validator: &SummaryValidator,
    user_id: Uuid,
    logs: &[ExperienceLog],
) -> Result<ProfileSummary, AppError> {
    check_logs(logs)?;

    let stats = ProfileStats::from_logs(logs)
        .ok_or_else(|| AppError::NotFound("No logs for this user".to_string()))?;

    let prompt = build_summary_prompt(user_id, &stats, logs);

    info!(
        "Generating profile summary for user {} from {} logs",
        user_id, stats.log_count
    );
    let summary = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Summary generation failed: {e}")))?;

    let records: Vec<ReferenceRecord> = logs.iter().map(ExperienceLog::reference_record).collect();
    if let Err(failure) = validator.validate(&summary, &records) {
        warn!(
            kind = failure.kind.code(),
            "Generated summary for user {} rejected", user_id
        );
        return Err(failure.into());
    }

    Ok(ProfileSummary {
        user_id,
        summary,
        stats,
    })
}

/// Rejects logs with blank place ids or values outside the 1–5 scale.
pub fn check_logs(logs: &[ExperienceLog]) -> Result<(), AppError> {
    for (i, log) in logs.iter().enumerate() {
        if log.place_id.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "logs[{i}].place_id cannot be empty"
            )));
        }
        let fields = [
            ("rating", Some(log.rating)),
            ("sweetness", log.sweetness),
            ("strength", log.strength),
        ];
        for (name, value) in fields {
            if let Some(v) = value.filter(|v| !SCALE.contains(v)) {
                return Err(AppError::Validation(format!(
                    "logs[{i}].{name} must be between {} and {}, got {v}",
                    SCALE.start(),
                    SCALE.end()
                )));
            }
        }
    }
    Ok(())
}

/// Builds the generation prompt by filling the template with stats and recent logs.
pub fn build_summary_prompt(user_id: Uuid, stats: &ProfileStats, logs: &[ExperienceLog]) -> String {
    let recent_logs = recent_logs(logs)
        .into_iter()
        .map(format_log)
        .collect::<Vec<_>>()
        .join("\n");

    SUMMARY_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{format_instruction}", FORMAT_INSTRUCTION)
        .replace("{user_id}", &user_id.to_string())
        .replace("{average_rating}", &format!("{:.1}", stats.average_rating))
        .replace("{average_sweetness}", &format_average(stats.average_sweetness))
        .replace("{average_strength}", &format_average(stats.average_strength))
        .replace("{places_tried}", &stats.places_tried.join(", "))
        .replace("{recent_logs}", &recent_logs)
}

/// Newest first; undated logs after dated ones, keeping their input order.
fn recent_logs(logs: &[ExperienceLog]) -> Vec<&ExperienceLog> {
    let mut sorted: Vec<&ExperienceLog> = logs.iter().collect();
    sorted.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
    sorted.truncate(RECENT_LOG_LIMIT);
    sorted
}

fn format_log(log: &ExperienceLog) -> String {
    let mut line = format!("- {}: rating {}", log.place_id, log.rating);
    if let Some(s) = log.sweetness {
        line.push_str(&format!(", sweetness {s}"));
    }
    if let Some(s) = log.strength {
        line.push_str(&format!(", strength {s}"));
    }
    if let Some(notes) = log.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        line.push_str(&format!(", notes: \"{}\"", notes.trim()));
    }
    line
}

fn format_average(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}"))
}
