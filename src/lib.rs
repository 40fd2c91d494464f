pub mod application;
pub mod connector;
pub mod domain;
pub mod surface;

pub use application::{ChatTransport, CompletionClient};

pub use connector::{MockTransport, OpenAiClient};

pub use domain::{
    ChatMessage, ChatRole, CompletionConfig, CompletionResult, DomainError, ErrorCode, Transcript,
};

pub use surface::ChatRepl;
