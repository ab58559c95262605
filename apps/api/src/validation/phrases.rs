//! Candidate proper-noun extraction.
//!
//! A candidate phrase is a run of capitalized words separated only by whitespace.
//! Any other separator ends the run, including apostrophes: `Bob's Burgers` yields
//! `Bob` and `Burgers` as two independent phrases.

use std::collections::HashSet;

/// A word-like slice of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// True when the gap before this token is non-empty and pure whitespace.
    pub follows_space: bool,
}

/// Splits text into alphanumeric tokens. A hyphen between two alphanumerics stays
/// inside the token (`Jean-Luc`); every other non-alphanumeric character separates.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let offset = rest.find(|c: char| c.is_alphanumeric())?;
        let separator = &rest[..offset];
        let start = self.pos + offset;

        let mut end = start;
        let mut prev_alnum = false;
        let mut chars = self.text[start..].char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            let keep = if c.is_alphanumeric() {
                true
            } else if c == '-' && prev_alnum {
                chars.peek().is_some_and(|&(_, next)| next.is_alphanumeric())
            } else {
                false
            };
            if !keep {
                break;
            }
            prev_alnum = c.is_alphanumeric();
            end = start + i + c.len_utf8();
        }
        self.pos = end;

        Some(Token {
            text: &self.text[start..end],
            follows_space: !separator.is_empty() && separator.chars().all(char::is_whitespace),
        })
    }
}

/// Uppercase first letter and at least two characters long.
pub fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && chars.next().is_some(),
        None => false,
    }
}

/// Lazy iterator over the candidate phrases of a text.
pub struct CandidatePhrases<'a> {
    tokens: Tokens<'a>,
    stopwords: &'a HashSet<String>,
    current: Vec<&'a str>,
}

impl<'a> CandidatePhrases<'a> {
    /// Closes the run being built. Lone stopwords are dropped; multi-word runs never are.
    fn close_run(&mut self) -> Option<String> {
        if self.current.is_empty() {
            return None;
        }
        let phrase = self.current.join(" ");
        let lone_stopword = self.current.len() == 1 && self.stopwords.contains(&phrase);
        self.current.clear();
        (!lone_stopword).then_some(phrase)
    }
}

impl Iterator for CandidatePhrases<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let Some(token) = self.tokens.next() else {
                return self.close_run();
            };

            if !is_capitalized(token.text) {
                if let Some(phrase) = self.close_run() {
                    return Some(phrase);
                }
                continue;
            }

            let closed = if token.follows_space {
                None
            } else {
                self.close_run()
            };
            self.current.push(token.text);
            if closed.is_some() {
                return closed;
            }
        }
    }
}

/// Returns the candidate phrases of `text` in order of appearance.
pub fn candidate_phrases<'a>(text: &'a str, stopwords: &'a HashSet<String>) -> CandidatePhrases<'a> {
    CandidatePhrases {
        tokens: Tokens::new(text),
        stopwords,
        current: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::lexicon::ValidatorConfig;

    fn phrases(text: &str) -> Vec<String> {
        let config = ValidatorConfig::default();
        candidate_phrases(text, &config.stopwords).collect()
    }

    #[test]
    fn test_tokens_split_on_apostrophe() {
        let tokens: Vec<&str> = Tokens::new("Bob's Burgers").map(|t| t.text).collect();
        assert_eq!(tokens, vec!["Bob", "s", "Burgers"]);
    }

    #[test]
    fn test_tokens_keep_inner_hyphen() {
        let tokens: Vec<&str> = Tokens::new("Jean-Luc's -dash- end-").map(|t| t.text).collect();
        assert_eq!(tokens, vec!["Jean-Luc", "s", "dash", "end"]);
    }

    #[test]
    fn test_tokens_mark_whitespace_gaps() {
        let tokens: Vec<Token> = Tokens::new("Zen, Tea House").collect();
        assert!(!tokens[1].follows_space, "comma gap is not pure whitespace");
        assert!(tokens[2].follows_space);
    }

    #[test]
    fn test_is_capitalized() {
        assert!(is_capitalized("Zen"));
        assert!(is_capitalized("MatchaLab"));
        assert!(!is_capitalized("I"));
        assert!(!is_capitalized("zen"));
        assert!(!is_capitalized("2024"));
        assert!(!is_capitalized(""));
    }

    #[test]
    fn test_merges_consecutive_capitalized_words() {
        assert_eq!(
            phrases("I had a great time at Zen Tea House and also tried MatchaLab."),
            vec!["Zen Tea House", "MatchaLab"]
        );
    }

    #[test]
    fn test_possessive_splits_into_two_phrases() {
        assert_eq!(
            phrases("We went to Bob's Burgers and then to The Golden Spoon."),
            vec!["Bob", "Burgers", "The Golden Spoon"]
        );
    }

    #[test]
    fn test_lone_stopword_dropped_but_multiword_run_kept() {
        assert_eq!(
            phrases("The Quick Brown Fox jumped over the lazy Dog."),
            vec!["The Quick Brown Fox", "Dog"]
        );
        assert!(phrases("This is a test.").is_empty());
    }

    #[test]
    fn test_sentence_end_breaks_run() {
        assert_eq!(
            phrases("We loved Zen Tea House. Green Leaf Cafe was fine."),
            vec!["Zen Tea House", "Green Leaf Cafe"]
        );
    }

    #[test]
    fn test_comma_breaks_run() {
        assert_eq!(
            phrases("try Zen Tea House, Green Leaf Cafe and more."),
            vec!["Zen Tea House", "Green Leaf Cafe"]
        );
    }

    #[test]
    fn test_single_letters_and_numbers_ignored() {
        assert!(phrases("I rated it 5 out of 5 at 3 PM").iter().all(|p| p == "PM"));
        assert!(phrases("i visited zen tea house.").is_empty());
    }

    #[test]
    fn test_iteration_is_lazy_and_repeatable() {
        let config = ValidatorConfig::default();
        let text = "Starbuckz then Zen Tea House";
        let first = candidate_phrases(text, &config.stopwords).next();
        assert_eq!(first.as_deref(), Some("Starbuckz"));
        let again: Vec<String> = candidate_phrases(text, &config.stopwords).collect();
        assert_eq!(again, vec!["Starbuckz", "Zen Tea House"]);
    }

    #[test]
    fn test_custom_stopwords() {
        let stopwords: HashSet<String> = ["Matcha".to_string()].into_iter().collect();
        let found: Vec<String> = candidate_phrases("Matcha is nice. The end.", &stopwords).collect();
        assert_eq!(found, vec!["The"]);
    }
}
