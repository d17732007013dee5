use std::time::{Duration, Instant};

/// Advisory message shown to the user until it expires.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    expires_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Notice {
            message: message.into(),
            expires_at: now + ttl,
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}
