use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::matcher::ReferenceRecord;

/// Ratings, sweetness and strength all use the same closed scale.
pub const SCALE: RangeInclusive<u8> = 1..=5;

/// One logged visit, as supplied by the caller's snapshot of the experience log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceLog {
    pub place_id: String,
    pub rating: u8,
    pub sweetness: Option<u8>,
    pub strength: Option<u8>,
    pub notes: Option<String>,
    pub logged_at: Option<DateTime<Utc>>,
}

impl ExperienceLog {
    pub fn reference_record(&self) -> ReferenceRecord {
        ReferenceRecord {
            entity_name: self.place_id.clone(),
            rating: f64::from(self.rating),
        }
    }
}

/// Aggregates computed from a user's logs and fed into the summary prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStats {
    pub log_count: usize,
    pub average_rating: f64,
    pub average_sweetness: Option<f64>,
    pub average_strength: Option<f64>,
    /// Distinct places in first-seen order.
    pub places_tried: Vec<String>,
}

impl ProfileStats {
    /// Returns `None` for an empty slice.
    pub fn from_logs(logs: &[ExperienceLog]) -> Option<Self> {
        if logs.is_empty() {
            return None;
        }

        let mut places_tried: Vec<String> = Vec::new();
        for log in logs {
            if !places_tried.contains(&log.place_id) {
                places_tried.push(log.place_id.clone());
            }
        }

        Some(Self {
            log_count: logs.len(),
            average_rating: mean(logs.iter().map(|l| l.rating))?,
            average_sweetness: mean(logs.iter().filter_map(|l| l.sweetness)),
            average_strength: mean(logs.iter().filter_map(|l| l.strength)),
            places_tried,
        })
    }
}

fn mean(values: impl Iterator<Item = u8>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| {
        (sum + f64::from(v), count + 1)
    });
    (count > 0).then(|| sum / count as f64)
}

/// A validated summary, returned exactly as the provider produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub user_id: Uuid,
    pub summary: String,
    pub stats: ProfileStats,
}
