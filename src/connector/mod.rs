//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - OpenAI chat-completions transport over HTTP
//! - Mock transport for offline use and tests

pub mod adapter;

pub use adapter::*;
