//! In-memory `TextGenerator` for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{LlmError, TextGenerator};

/// Replies with a fixed text (or fails) and keeps every prompt it was given.
pub struct ScriptedGenerator {
    reply: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with `LlmError::EmptyContent`.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(LlmError::EmptyContent)
    }
}
