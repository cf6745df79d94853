//! Cooldown gating for retry-style behaviors.

use wisp_core::Tick;

/// A deadline before which a behavior is inactive.
///
/// Behaviors that hit a soft failure (a container that only took part of
/// the stack) pause themselves instead of busy-retrying every tick; the
/// deadline caps retry pressure without abandoning the target.
#[derive(Copy, Clone, Debug, Default)]
pub struct PauseTimer {
    until: Option<Tick>,
}

impl PauseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause for `duration` ticks from `now`.
    #[inline]
    pub fn pause(&mut self, now: Tick, duration: u64) {
        self.until = Some(now.offset(duration));
    }

    /// `true` while the deadline has not elapsed.
    #[inline]
    pub fn is_paused(&self, now: Tick) -> bool {
        self.until.is_some_and(|deadline| now < deadline)
    }

    /// Drop any pending deadline.
    #[inline]
    pub fn clear(&mut self) {
        self.until = None;
    }
}
