use std::sync::Arc;

use tracing::debug;

use crate::application::ChatTransport;
use crate::domain::{CompletionConfig, CompletionResult, ErrorCode};

/// Turns one user utterance into one normalized [`CompletionResult`], hiding
/// all transport detail from the caller.
///
/// This is the sole error boundary of the core: every failure path terminates
/// in a `Failure` result, nothing propagates as an error. The client holds
/// only read-only configuration and a shared transport, retains no state
/// between calls, and is safe to invoke concurrently for independent
/// utterances.
pub struct CompletionClient {
    config: CompletionConfig,
    transport: Arc<dyn ChatTransport>,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self { config, transport }
    }

    /// Complete a single utterance.
    ///
    /// Without a configured credential this returns `CREDENTIAL_MISSING`
    /// immediately, before any network activity. Otherwise the utterance is
    /// wrapped in the user template, sent with the fixed system prompt, and
    /// the outcome is mapped onto the result taxonomy. No timeout, retry, or
    /// cancellation: the single transport exchange runs to completion or
    /// failure.
    pub async fn complete(&self, user_text: &str) -> CompletionResult {
        if !self.config.has_credential() {
            return CompletionResult::failure(
                ErrorCode::CredentialMissing,
                "No API key configured. Set OPENAI_API_KEY in your environment.",
            );
        }

        let user_prompt = Self::render_user_prompt(user_text);
        debug!("Sending completion request ({} chars)", user_prompt.len());

        match self
            .transport
            .send_chat(self.config.system_prompt(), &user_prompt)
            .await
        {
            Ok(text) => CompletionResult::success(text),
            Err(e) => CompletionResult::from_error(&e),
        }
    }

    /// Minimal user template. The utterance is passed through verbatim, no
    /// sanitization.
    fn render_user_prompt(user_text: &str) -> String {
        format!("User: {user_text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_template_preserves_utterance_verbatim() {
        let prompt = CompletionClient::render_user_prompt("  spaces\nand newlines  ");
        assert_eq!(prompt, "User:   spaces\nand newlines  ");
    }

    #[test]
    fn user_template_allows_empty_utterance() {
        assert_eq!(CompletionClient::render_user_prompt(""), "User: ");
    }
}
