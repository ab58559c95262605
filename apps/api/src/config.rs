use anyhow::{Context, Result};

use crate::validation::lexicon::{LengthLimits, ValidatorConfig, DEFAULT_MAX_SENTENCES, DEFAULT_MAX_WORDS};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub summary_limits: LengthLimits,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            summary_limits: LengthLimits {
                max_sentences: parse_env("SUMMARY_MAX_SENTENCES", DEFAULT_MAX_SENTENCES)?,
                max_words: parse_env("SUMMARY_MAX_WORDS", DEFAULT_MAX_WORDS)?,
            },
        })
    }

    /// Default word lists and rating bands with the configured length limits.
    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            limits: self.summary_limits,
            ..ValidatorConfig::default()
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
