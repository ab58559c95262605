// Prompt constants for profile summary generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Profile summary prompt template.
/// Replace: {user_id}, {average_rating}, {average_sweetness}, {average_strength},
///          {places_tried}, {recent_logs}, {grounding_instruction}, {format_instruction}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"You are summarizing a person's matcha tasting history for their profile page.
Describe their taste preferences and how they felt about the places they tried, speaking to them directly ("You ...").

User ID: {user_id}
Average rating: {average_rating}
Average sweetness: {average_sweetness}
Average strength: {average_strength}
Places tried: {places_tried}
Recent logs:
{recent_logs}

{grounding_instruction}

{format_instruction}

Let the tone follow the ratings: do not sound enthusiastic about low-rated visits or negative about high-rated ones."#;
