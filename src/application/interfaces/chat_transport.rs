use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for exchanging one chat-style prompt with an LLM endpoint.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers ([`crate::application::CompletionClient`]) remain
/// decoupled from any particular provider or HTTP client library.
///
/// Contract: `Ok` carries the assistant's reply text unmodified. A non-success
/// HTTP status maps to [`DomainError::Transport`]; a success status whose body
/// lacks usable reply content maps to [`DomainError::EmptyResponse`]; any
/// other failure (connection, serialization) maps to [`DomainError::Internal`].
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a `system` context message followed by a `user` prompt and return
    /// the assistant's response text.
    async fn send_chat(&self, system: &str, user: &str) -> Result<String, DomainError>;
}
