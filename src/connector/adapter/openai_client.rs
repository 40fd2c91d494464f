use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatTransport;
use crate::domain::{CompletionConfig, DomainError};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for the OpenAI chat-completions API (and compatible endpoints
/// such as LM Studio or any server speaking the same wire format).
///
/// Implements [`ChatTransport`] so the completion client stays decoupled from
/// transport and serialization details. The bearer credential, endpoint,
/// model, and sampling parameters all come from the injected
/// [`CompletionConfig`]; nothing is read from ambient process state here.
///
/// No request timeout is set: the call either resolves or the underlying
/// transport eventually fails, and the caller owns how that failure is
/// presented.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn from_config(config: &CompletionConfig) -> Self {
        let url = format!(
            "{}{CHAT_COMPLETIONS_PATH}",
            config.base_url().trim_end_matches('/')
        );
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key().to_string(),
            model: config.model().to_string(),
            max_tokens: config.max_tokens(),
            temperature: config.temperature(),
            url,
        }
    }

    /// Convenience constructor reading `OPENAI_*` environment variables via
    /// [`CompletionConfig::from_env`].
    pub fn from_env() -> Self {
        Self::from_config(&CompletionConfig::from_env())
    }

    /// Extract the first choice's message content from a raw response body.
    ///
    /// A body that deserializes but carries no choice, or a choice with a
    /// missing or empty content field, is an empty response. A body that does
    /// not deserialize at all is an internal error.
    fn parse_reply(body: &str) -> Result<String, DomainError> {
        let response: ApiResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::internal(format!("failed to parse response: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| DomainError::empty_response("no reply content in response"))
    }
}

#[async_trait]
impl ChatTransport for OpenAiClient {
    async fn send_chat(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::internal(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::transport(format!("API returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::internal(format!("failed to read response body: {e}")))?;
        debug!("OpenAiClient: received {} byte response", body.len());

        Self::parse_reply(&body)
    }
}
