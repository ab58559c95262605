// Profile summaries: prompt assembly from experience logs, generation through
// llm_client, and validation of the result before it reaches the caller.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
