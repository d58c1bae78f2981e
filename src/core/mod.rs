pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use config::ApiKey;
pub use constants::{API_KEY_ENV_VAR, FORMAT_INSTRUCTION};
pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig};
pub use traits::CompletionProvider;
pub use types::{ChatRole, Completion, LanguageModelUsage, Transcript, Turn};
