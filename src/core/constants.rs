pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Sent as the first user turn of a multi-turn transcript.
pub const FORMAT_INSTRUCTION: &str = "for the whole conversation, output in markdown format and have max 70 characters per line";
