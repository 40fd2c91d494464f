use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatTransport;
use crate::domain::DomainError;

const CANNED_TIPS: &[&str] = &[
    "Aim for around 1.6 g of protein per kilogram of body weight per day.",
    "Two or three full-body strength sessions a week is a solid starting point.",
    "Hydrate before you feel thirsty, especially on training days.",
    "Prioritize sleep: most recovery happens while you rest.",
    "Fill half your plate with vegetables and you rarely go far wrong.",
];

/// Offline [`ChatTransport`] returning canned coaching tips.
///
/// Deterministic: the same utterance always selects the same tip, which keeps
/// demo sessions and tests reproducible without network access.
pub struct MockTransport;

impl MockTransport {
    pub fn new() -> Self {
        Self
    }

    fn pick_tip(user: &str) -> &'static str {
        let mut hasher = DefaultHasher::new();
        user.hash(&mut hasher);
        CANNED_TIPS[(hasher.finish() as usize) % CANNED_TIPS.len()]
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send_chat(&self, _system: &str, user: &str) -> Result<String, DomainError> {
        let tip = Self::pick_tip(user);
        debug!("MockTransport: serving canned tip");
        Ok(tip.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_utterance_gets_same_tip() {
        let transport = MockTransport::new();
        let a = transport.send_chat("system", "protein?").await.unwrap();
        let b = transport.send_chat("system", "protein?").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn tips_come_from_the_canned_set() {
        let transport = MockTransport::new();
        let tip = transport.send_chat("system", "how often to train").await.unwrap();
        assert!(CANNED_TIPS.contains(&tip.as_str()));
    }
}
