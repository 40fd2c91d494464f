mod completion;
mod config;
mod message;

pub use completion::*;
pub use config::*;
pub use message::*;
