//! OpenAI chat completions client.
//!
//! Only the `/chat/completions` endpoint is used, and only the first choice of
//! a reply is read.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::{
    API_KEY_ENV_VAR, ApiKey, Completion, CompletionProvider, HttpClient, HttpClientConfig,
    LanguageModelUsage, LlmError, Transcript, Turn,
};
use crate::provider::constants::openai;

pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub http_config: HttpClientConfig,
    /// Overrides the default `chat-cli/<version>` user agent
    pub user_agent: Option<String>,
}

impl OpenAiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: openai::API_BASE.to_string(),
            model: openai::DEFAULT_MODEL.to_string(),
            http_config: HttpClientConfig::default(),
            user_agent: None,
        }
    }

    /// Resolve `api_key` and build a config with the defaults.
    pub fn from_api_key(api_key: ApiKey) -> Result<Self, LlmError> {
        Ok(Self::new(api_key.resolve()?))
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            openai::CHAT_COMPLETIONS_ENDPOINT
        )
    }

    fn auth_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )
    }
}

pub struct OpenAiClient {
    config: OpenAiConfig,
    http: HttpClient,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        if config.api_key.is_empty() {
            return Err(LlmError::MissingApiKey {
                var: API_KEY_ENV_VAR.to_string(),
            });
        }

        let http = HttpClient::new(&config.http_config, config.user_agent.as_deref())?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send the transcript to the configured model and return the full reply.
    pub async fn generate(&self, transcript: &Transcript) -> Result<Completion, LlmError> {
        self.generate_with_model(&self.config.model, transcript).await
    }

    /// Like [`generate`](Self::generate), but for `model` instead of the
    /// configured one.
    #[tracing::instrument(
        name = "chat_completion",
        skip(self, transcript),
        fields(turns = transcript.len())
    )]
    pub async fn generate_with_model(
        &self,
        model: &str,
        transcript: &Transcript,
    ) -> Result<Completion, LlmError> {
        let request = CompletionRequest::new(model, transcript.clone());
        let headers = [self.config.auth_header()];

        let response: CompletionResponse = self
            .http
            .post_json(&self.config.endpoint_url(), &headers, &request)
            .await?;

        response.into_completion()
    }

    /// Single-shot path: one user turn, no formatting instruction, sent to
    /// the configured model.
    pub async fn complete_prompt(&self, prompt: &str) -> Result<String, LlmError> {
        self.complete(&Transcript::single(prompt)).await
    }

    /// Single-shot path for an explicit `model`.
    pub async fn complete_prompt_with_model(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<String, LlmError> {
        let completion = self
            .generate_with_model(model, &Transcript::single(prompt))
            .await?;
        Ok(completion.text)
    }

    /// Multi-turn path over a flat, alternating user/assistant history.
    pub async fn complete_history<S: AsRef<str> + Sync>(
        &self,
        history: &[S],
    ) -> Result<String, LlmError> {
        self.complete(&Transcript::from_alternating(history)).await
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, transcript: &Transcript) -> Result<String, LlmError> {
        Ok(self.generate(transcript).await?.text)
    }
}

/// Outbound body of a chat completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Transcript,
}

impl CompletionRequest {
    pub fn new(model: &str, messages: Transcript) -> Self {
        Self {
            model: model.to_string(),
            messages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: LanguageModelUsage,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: Turn,
    pub finish_reason: Option<String>,
}

impl CompletionResponse {
    pub fn into_completion(self) -> Result<Completion, LlmError> {
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;

        Ok(Completion {
            id: self.id,
            model: self.model,
            text: choice.message.content,
            finish_reason: choice.finish_reason,
            usage: self.usage,
        })
    }
}
