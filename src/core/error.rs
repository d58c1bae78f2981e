use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("{var} is not set")]
    MissingApiKey { var: String },

    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    #[error("Request error: {message}")]
    Request {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// The backend answered with an empty `choices` list.
    #[error("API returned no choices")]
    EmptyResponse,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_names_the_variable() {
        let err = LlmError::MissingApiKey {
            var: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(err.to_string(), "OPENAI_API_KEY is not set");
    }

    #[test]
    fn parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = LlmError::Parse {
            message: "Failed to parse response as JSON".to_string(),
            source: Box::new(source),
        };

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Parse error:"));
    }
}
