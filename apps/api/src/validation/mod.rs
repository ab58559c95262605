//! Generated summary validation.
//!
//! Runs after text generation and before anything is persisted or returned:
//! fabricated place check, then tone / rating consistency, then shape. The first
//! failing check wins and the text is never modified.

pub mod hallucination;
pub mod lexicon;
pub mod matcher;
pub mod phrases;
pub mod sentiment;
pub mod structure;

use thiserror::Error;
use tracing::debug;

use crate::validation::hallucination::check_no_hallucinated_entities;
use crate::validation::lexicon::ValidatorConfig;
use crate::validation::matcher::{KnownEntitySet, ReferenceRecord};
use crate::validation::sentiment::check_sentiment_consistency;
use crate::validation::structure::check_length_and_format;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    FabricatedEntity,
    ToneMismatch,
    TooLong,
    MissingTerminalPunctuation,
}

impl FailureKind {
    /// Error code used in API responses.
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::FabricatedEntity => "FABRICATED_ENTITY",
            FailureKind::ToneMismatch => "TONE_MISMATCH",
            FailureKind::TooLong => "TOO_LONG",
            FailureKind::MissingTerminalPunctuation => "MISSING_TERMINAL_PUNCTUATION",
        }
    }
}

/// Why a generated summary was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct ValidationFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl ValidationFailure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Human-readable message, prefixed per kind.
    pub fn message(&self) -> String {
        match self.kind {
            FailureKind::FabricatedEntity => format!(
                "Detected possible fabricated place names in summary: {}",
                self.detail
            ),
            FailureKind::TooLong => format!("Summary too long: {}.", self.detail),
            FailureKind::ToneMismatch | FailureKind::MissingTerminalPunctuation => {
                self.detail.clone()
            }
        }
    }
}


/// Arithmetic mean of the record ratings, `None` when there are no records.
pub fn average_rating(records: &[ReferenceRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    Some(records.iter().map(|r| r.rating).sum::<f64>() / records.len() as f64)
}

/// Stateless validator over a fixed set of tables. Safe to share across requests.
#[derive(Debug, Clone, Default)]
pub struct SummaryValidator {
    config: ValidatorConfig,
}

impl SummaryValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validates `text` against the exact records it was generated from and returns
    /// it untouched on success. With no records only the shape check runs.
    pub fn validate<'t>(
        &self,
        text: &'t str,
        records: &[ReferenceRecord],
    ) -> Result<&'t str, ValidationFailure> {
        if let Some(average) = average_rating(records) {
            let known = KnownEntitySet::from_records(records);
            debug!(
                known_entities = known.len(),
                average_rating = average,
                "Validating generated summary"
            );

            check_no_hallucinated_entities(text, &known, &self.config.stopwords)?;
            check_sentiment_consistency(
                text,
                average,
                &self.config.sentiment,
                &self.config.rating_bands,
            )?;
        }

        check_length_and_format(text, &self.config.limits)?;

        Ok(text)
    }
}
