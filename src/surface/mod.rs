//! # Conversation Surface
//!
//! Terminal presentation: the interactive REPL that drives the completion
//! client and maintains the message transcript.

pub mod repl;

pub use repl::*;
