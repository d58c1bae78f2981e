//! Thin HTTP layer shared by the completion client.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::LlmError;

/// Configuration for the underlying HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for one request, body included
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
        }
    }
}

/// Single-attempt JSON client. Failures are returned to the caller as they
/// happen; nothing is retried.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig, user_agent: Option<&str>) -> Result<Self, LlmError> {
        let default_ua = format!("chat-cli/{}", env!("CARGO_PKG_VERSION"));
        let ua = user_agent.unwrap_or(&default_ua);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(ua)
            .build()
            .map_err(|e| {
                LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// POST `body` as JSON and decode the JSON reply into `Res`.
    ///
    /// Any non-2xx status is reported as [`LlmError::Api`] with the body text
    /// as the message.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err(level = "debug")
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|e| LlmError::Request {
            message: "Failed to encode request body".to_string(),
            source: Box::new(e),
        })?;

        let mut req_builder = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);

        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| LlmError::Network {
            message: if e.is_timeout() {
                "Request timed out".to_string()
            } else {
                "Failed to complete request".to_string()
            },
            source: Box::new(e),
        })?;

        let status = res.status();

        let response_text = res.text().await.map_err(|e| LlmError::Parse {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        if !status.is_success() {
            warn!(status = %status, "API returned error status");
            return Err(LlmError::Api {
                message: format!("{status}: {response_text}"),
                status_code: Some(status.as_u16()),
            });
        }

        debug!(status = %status, bytes = response_text.len(), "HTTP request successful");

        serde_json::from_str(&response_text).map_err(|e| LlmError::Parse {
            message: "Failed to decode response body".to_string(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    fn client() -> HttpClient {
        HttpClient::new(
            &HttpClientConfig {
                timeout: Duration::from_secs(5),
            },
            None,
        )
        .expect("client")
    }

    #[tokio::test]
    async fn sends_json_and_extra_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("content-type", "application/json"))
            .and(header("x-test", "yes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let headers = vec![("x-test".to_string(), "yes".to_string())];
        let res: Value = client()
            .post_json(&format!("{}/echo", server.uri()), &headers, &json!({}))
            .await
            .unwrap();

        assert_eq!(res["ok"], true);
    }

    #[tokio::test]
    async fn default_user_agent_names_the_crate() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let _: Value = client()
            .post_json(&server.uri(), &[], &json!({}))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let ua = requests[0]
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(ua.starts_with("chat-cli/"), "unexpected user agent {ua}");
    }

    #[tokio::test]
    async fn error_status_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .expect(1)
            .mount(&server)
            .await;

        let result: Result<Value, _> = client().post_json(&server.uri(), &[], &json!({})).await;

        match result {
            Err(LlmError::Api {
                status_code: Some(503),
                message,
            }) => assert!(message.contains("busy")),
            other => panic!("expected 503 Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_response_hits_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new(
            &HttpClientConfig {
                timeout: Duration::from_millis(50),
            },
            None,
        )
        .unwrap();

        let result: Result<Value, _> = client.post_json(&server.uri(), &[], &json!({})).await;
        assert!(matches!(result, Err(LlmError::Network { .. })));
    }
}
