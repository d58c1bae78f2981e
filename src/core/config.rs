use super::{constants::API_KEY_ENV_VAR, error::LlmError};

/// Where the bearer credential comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// Read `OPENAI_API_KEY` from the environment
    Default,
    Custom(String),
}

impl ApiKey {
    pub fn resolve(self) -> Result<String, LlmError> {
        match self {
            ApiKey::Default => resolve_from_env(API_KEY_ENV_VAR),
            ApiKey::Custom(key) if key.is_empty() => Err(LlmError::MissingApiKey {
                var: API_KEY_ENV_VAR.to_string(),
            }),
            ApiKey::Custom(key) => Ok(key),
        }
    }
}

/// Look up a credential variable. Unset and empty are both treated as missing.
pub(crate) fn resolve_from_env(var: &str) -> Result<String, LlmError> {
    match std::env::var(var) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(LlmError::MissingApiKey {
            var: var.to_string(),
        }),
    }
}
