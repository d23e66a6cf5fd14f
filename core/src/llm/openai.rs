use crate::llm::gateway::{CompletionError, CompletionGateway};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 900;

/// Settings injected into [`OpenAiGateway`] at construction.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

// keep the key out of logs
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client. Sends one user message per call.
#[derive(Debug, Clone)]
pub struct OpenAiGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl OpenAiGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request_payload = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens
        });

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request_payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "completion service rejected request");
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion =
            serde_json::from_str(&body).map_err(|e| CompletionError::Malformed(e.to_string()))?;

        // an absent choice or content counts as an empty completion
        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::State,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::post,
    };
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    struct Captured {
        body: Arc<Mutex<Option<Value>>>,
        auth: Arc<Mutex<Option<String>>>,
    }

    async fn spawn_upstream(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1/chat/completions")
    }

    async fn capture(
        State(captured): State<Captured>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        *captured.body.lock().unwrap() = Some(body);
        *captured.auth.lock().unwrap() = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "## SWOT\nStrengths: ...\n" } }]
        }))
    }

    #[tokio::test]
    async fn test_complete_sends_configured_request() {
        let captured = Captured::default();
        let router = Router::new()
            .route("/v1/chat/completions", post(capture))
            .with_state(captured.clone());
        let endpoint = spawn_upstream(router).await;

        let gateway = OpenAiGateway::new(GatewayConfig::new("test-key").with_endpoint(endpoint));
        let text = gateway.complete("hello prompt").await.unwrap();
        assert_eq!(text, "## SWOT\nStrengths: ...\n");

        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 900);
        assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello prompt");
        assert_eq!(
            captured.auth.lock().unwrap().as_deref(),
            Some("Bearer test-key")
        );
    }

    #[tokio::test]
    async fn test_upstream_status_and_body_forwarded() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    r#"{"error":{"message":"Rate limit reached"}}"#,
                )
                    .into_response()
            }),
        );
        let endpoint = spawn_upstream(router).await;

        let gateway = OpenAiGateway::new(GatewayConfig::new("k").with_endpoint(endpoint));
        match gateway.complete("p").await {
            Err(CompletionError::Upstream { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, r#"{"error":{"message":"Rate limit reached"}}"#);
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_completion() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [] })) }),
        );
        let endpoint = spawn_upstream(router).await;

        let gateway = OpenAiGateway::new(GatewayConfig::new("k").with_endpoint(endpoint));
        assert_eq!(gateway.complete("p").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_non_json_success_is_malformed() {
        let router = Router::new().route("/v1/chat/completions", post(|| async { "not json" }));
        let endpoint = spawn_upstream(router).await;

        let gateway = OpenAiGateway::new(GatewayConfig::new("k").with_endpoint(endpoint));
        assert!(matches!(
            gateway.complete("p").await,
            Err(CompletionError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = OpenAiGateway::new(
            GatewayConfig::new("k").with_endpoint(format!("http://{addr}/v1/chat/completions")),
        );
        assert!(matches!(
            gateway.complete("p").await,
            Err(CompletionError::Transport(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GatewayConfig::new("sk-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
