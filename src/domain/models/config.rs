use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// System prompt constraining the assistant to fitness, nutrition, and
/// general health topics.
pub const COACH_SYSTEM_PROMPT: &str = "\
You are a helpful AI fitness and health coach assistant. Provide clear, \
accurate, and helpful responses about fitness, nutrition, workouts, and \
general health. If the query is not related to fitness, nutrition, health, \
or wellness, respond with 'I'm sorry, I can only help with fitness, \
nutrition, and health related questions.' You're not a medical advisor, so \
don't give medical advice.";

/// Immutable configuration for the completion client.
///
/// The credential, endpoint, model, and sampling parameters live here rather
/// than in ambient process state, so tests can substitute fixtures and the
/// client stays free of hidden globals. A blank `api_key` is a valid,
/// expected state — the client reports it as a failure result instead of
/// refusing to start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    system_prompt: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            system_prompt: COACH_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl CompletionConfig {
    /// Read configuration from the environment:
    /// - `OPENAI_API_KEY`  — bearer credential; may be absent or blank
    /// - `OPENAI_BASE_URL` — optional; defaults to `https://api.openai.com`
    /// - `OPENAI_MODEL`    — optional; defaults to `gpt-4o`
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Whether a usable credential is configured. Whitespace-only keys count
    /// as absent.
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
