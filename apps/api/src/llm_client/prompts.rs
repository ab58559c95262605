// Shared prompt fragments. Each service that needs generation defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// Common instruction appended to every generation prompt.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Only mention places that appear in the data above, spelled exactly as given. \
    Do NOT invent places, visits, or opinions that the data does not support.";

/// Output shape the validators enforce.
pub const FORMAT_INSTRUCTION: &str = "\
    Write plain prose in at most three sentences. \
    End with a period, exclamation mark, or question mark. \
    Do NOT use markdown, lists, or headings.";
