//! Lexicon sentiment scoring and the tone / rating consistency check.

use crate::validation::lexicon::{RatingBands, SentimentLexicon};
use crate::validation::{FailureKind, ValidationFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentScore {
    pub fn tone(&self) -> Tone {
        use std::cmp::Ordering;
        match self.positive.cmp(&self.negative) {
            Ordering::Greater => Tone::Positive,
            Ordering::Less => Tone::Negative,
            Ordering::Equal => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    Low,
    Mid,
    High,
}

impl RatingBands {
    pub fn classify(&self, average_rating: f64) -> RatingBand {
        if average_rating < self.low_below {
            RatingBand::Low
        } else if average_rating > self.high_above {
            RatingBand::High
        } else {
            RatingBand::Mid
        }
    }
}

impl SentimentLexicon {
    /// Counts whole-word, case-insensitive lexicon hits.
    pub fn score(&self, text: &str) -> SentimentScore {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .fold(SentimentScore::default(), |mut score, word| {
                if self.positive.contains(&word) {
                    score.positive += 1;
                } else if self.negative.contains(&word) {
                    score.negative += 1;
                }
                score
            })
    }
}

/// Rejects positive text backed by low ratings and negative text backed by high ratings.
pub fn check_sentiment_consistency(
    text: &str,
    average_rating: f64,
    lexicon: &SentimentLexicon,
    bands: &RatingBands,
) -> Result<(), ValidationFailure> {
    if text.is_empty() {
        return Ok(());
    }

    let tone = lexicon.score(text).tone();
    let detail = match (tone, bands.classify(average_rating)) {
        (Tone::Positive, RatingBand::Low) => format!(
            "Positive tone detected despite low average rating ({average_rating:.1})."
        ),
        (Tone::Negative, RatingBand::High) => format!(
            "Negative tone detected despite high average rating ({average_rating:.1})."
        ),
        _ => return Ok(()),
    };

    Err(ValidationFailure::new(FailureKind::ToneMismatch, detail))
}
