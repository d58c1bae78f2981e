pub(crate) mod constants;
pub(crate) mod openai;

pub use constants::openai::DEFAULT_MODEL;
pub use openai::{Choice, CompletionRequest, CompletionResponse, OpenAiClient, OpenAiConfig};
