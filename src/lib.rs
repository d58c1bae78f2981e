//! # chat-cli
//!
//! Send a prompt to the OpenAI chat completions API and get the reply text back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_cli::{ApiKey, OpenAiClient, OpenAiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::new(OpenAiConfig::from_api_key(ApiKey::Default)?)?;
//!
//!     let reply = client
//!         .complete_history(&["Name a prime number", "7", "And another one?"])
//!         .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
//!
//! [`CompletionProvider::complete_or_empty`] keeps the forgiving contract of
//! the command-line tool: failures are logged and an empty string comes back.

pub mod chat;
pub mod core;
pub mod prompt;
pub mod provider;
pub mod telemetry;

pub use crate::core::{
    API_KEY_ENV_VAR, ApiKey, ChatRole, Completion, CompletionProvider, FORMAT_INSTRUCTION,
    HttpClientConfig, LanguageModelUsage, LlmError, Transcript, Turn,
};
pub use prompt::{ConsolePrompt, PromptSource};
pub use provider::{
    Choice, CompletionRequest, CompletionResponse, DEFAULT_MODEL, OpenAiClient, OpenAiConfig,
};
