// Transient success notifications with generation-guarded expiry

use serde::{Deserialize, Serialize};

/// A message shown after a mutating operation
///
/// `generation` identifies this particular showing. Timers scheduled for a
/// notification carry its generation, so a timer that fires after the
/// notification was replaced or dismissed cannot clear the newer one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub generation: u64,
    pub message: String,
    pub shown_at_ms: i64,
    pub expires_at_ms: i64,
}

impl Notification {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    /// How long this notification stays up; what an auto-dismiss timer waits
    pub fn lifetime_ms(&self) -> u64 {
        u64::try_from(self.expires_at_ms.saturating_sub(self.shown_at_ms)).unwrap_or(0)
    }
}

/// Holds at most one notification
#[derive(Debug, Clone, Default)]
pub(crate) struct NotificationSlot {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationSlot {
    pub(crate) fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replace whatever is shown; returns the new generation
    pub(crate) fn show(&mut self, message: &str, now_ms: i64, ttl_ms: u64) -> u64 {
        self.generation += 1;
        self.current = Some(Notification {
            generation: self.generation,
            message: message.to_string(),
            shown_at_ms: now_ms,
            expires_at_ms: now_ms.saturating_add_unsigned(ttl_ms),
        });
        self.generation
    }

    pub(crate) fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Clear only if the shown notification has this generation
    pub(crate) fn expire(&mut self, generation: u64) -> bool {
        let current = self.current.as_ref().is_some_and(|n| n.generation == generation);
        current && self.dismiss()
    }

    pub(crate) fn tick(&mut self, now_ms: i64) -> bool {
        let expired = self.current.as_ref().is_some_and(|n| n.is_expired(now_ms));
        expired && self.dismiss()
    }
}
