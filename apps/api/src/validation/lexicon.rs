//! Data tables consumed by the summary checks.
//!
//! Every word list and threshold lives here so the extraction and scoring logic
//! can be exercised against small custom tables in tests.

use std::collections::HashSet;

/// Capitalized words that commonly open a sentence. Matched case-sensitively,
/// and only against single-token phrases.
const DEFAULT_STOPWORDS: &[&str] = &[
    "A", "After", "Also", "Although", "An", "And", "As", "At", "Before", "Both", "But", "By",
    "During", "For", "From", "He", "Her", "His", "However", "I", "If", "In", "It", "Its", "My",
    "No", "Not", "Of", "On", "Or", "Our", "Overall", "She", "So", "That", "The", "Their", "Then",
    "There", "These", "They", "This", "Those", "To", "We", "What", "When", "Where", "While",
    "With", "You", "Your",
];

const DEFAULT_POSITIVE_WORDS: &[&str] = &[
    "love",
    "loved",
    "loves",
    "lovely",
    "great",
    "perfect",
    "amazing",
    "enjoy",
    "enjoyed",
    "delicious",
    "wonderful",
    "excellent",
    "fantastic",
    "favorite",
    "best",
];

const DEFAULT_NEGATIVE_WORDS: &[&str] = &[
    "hate",
    "hated",
    "terrible",
    "dislike",
    "disliked",
    "weak",
    "bitter",
    "bad",
    "awful",
    "horrible",
    "disappointing",
    "bland",
    "worst",
];

/// Ratings strictly below the midpoint of the 1–5 scale read as "low".
pub const DEFAULT_LOW_RATING_BELOW: f64 = 2.5;
pub const DEFAULT_HIGH_RATING_ABOVE: f64 = 3.5;
pub const DEFAULT_MAX_SENTENCES: usize = 3;
pub const DEFAULT_MAX_WORDS: usize = 150;

/// Positive and negative word lists, stored lowercased.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    pub positive: HashSet<String>,
    pub negative: HashSet<String>,
}

impl SentimentLexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: positive
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            negative: negative
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE_WORDS, DEFAULT_NEGATIVE_WORDS)
    }
}

/// Thresholds splitting an average rating into low / mid / high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBands {
    pub low_below: f64,
    pub high_above: f64,
}

impl Default for RatingBands {
    fn default() -> Self {
        Self {
            low_below: DEFAULT_LOW_RATING_BELOW,
            high_above: DEFAULT_HIGH_RATING_ABOVE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimits {
    pub max_sentences: usize,
    pub max_words: usize,
}

impl Default for LengthLimits {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

/// All tunable tables for one `SummaryValidator`.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub stopwords: HashSet<String>,
    pub sentiment: SentimentLexicon,
    pub rating_bands: RatingBands,
    pub limits: LengthLimits,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            sentiment: SentimentLexicon::default(),
            rating_bands: RatingBands::default(),
            limits: LengthLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stopwords_are_case_sensitive() {
        let config = ValidatorConfig::default();
        assert!(config.stopwords.contains("The"));
        assert!(!config.stopwords.contains("the"));
    }

    #[test]
    fn test_lexicon_lowercases_custom_words() {
        let lexicon = SentimentLexicon::new(["Superb"], ["MEH"]);
        assert!(lexicon.positive.contains("superb"));
        assert!(lexicon.negative.contains("meh"));
    }

    #[test]
    fn test_default_bands_straddle_the_midpoint() {
        let bands = RatingBands::default();
        assert!(bands.low_below < 3.0 && bands.high_above > 3.0);
    }
}
