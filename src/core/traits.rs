use async_trait::async_trait;

use super::{error::LlmError, types::Transcript};

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `transcript` and return the text of the first choice.
    async fn complete(&self, transcript: &Transcript) -> Result<String, LlmError>;

    /// Like [`complete`](Self::complete), but any failure is logged and
    /// replaced by an empty string.
    async fn complete_or_empty(&self, transcript: &Transcript) -> String {
        match self.complete(transcript).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Completion failed");
                String::new()
            }
        }
    }
}
