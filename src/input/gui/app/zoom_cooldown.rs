use std::time::{Duration, Instant};

/// Rate limit for wheel zooms.
///
/// An event is accepted only when strictly more than `cooldown` has passed
/// since the last accepted one. Ignored events do not push the window out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomCooldown {
    cooldown: Duration,
    last_accepted: Option<Instant>,
}

impl ZoomCooldown {
    #[must_use]
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
        }
    }

    pub fn try_accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) <= self.cooldown {
                return false;
            }
        }

        self.last_accepted = Some(now);
        true
    }
}
