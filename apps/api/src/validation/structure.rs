//! Shape checks: sentence count, word count, terminal punctuation.

use crate::validation::lexicon::LengthLimits;
use crate::validation::{FailureKind, ValidationFailure};

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Segments between terminal punctuation marks that contain anything besides whitespace.
pub fn count_sentences(text: &str) -> usize {
    text.split(is_terminal)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentence count, then word count, then terminal punctuation. First failure wins.
pub fn check_length_and_format(text: &str, limits: &LengthLimits) -> Result<(), ValidationFailure> {
    if text.is_empty() {
        return Ok(());
    }

    let sentences = count_sentences(text);
    let too_long = || {
        ValidationFailure::new(
            FailureKind::TooLong,
            format!("{sentences} sentences (limit is {})", limits.max_sentences),
        )
    };

    if sentences > limits.max_sentences {
        return Err(too_long());
    }

    // Word overflow is reported with the sentence-count message.
    if count_words(text) > limits.max_words {
        return Err(too_long());
    }

    if !text.trim_end().ends_with(is_terminal) {
        return Err(ValidationFailure::new(
            FailureKind::MissingTerminalPunctuation,
            "Summary must end with punctuation (., ! or ?).",
        ));
    }

    Ok(())
}
