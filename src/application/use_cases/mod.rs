mod complete_utterance;

pub use complete_utterance::*;
