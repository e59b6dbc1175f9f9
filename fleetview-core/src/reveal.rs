//! Fade/slide-in played once the list has loaded.
//!
//! The animation is a pure function of elapsed time so renderers only need
//! to feed it a clock.

use std::time::{Duration, Instant};

pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
/// Vertical offset, in logical pixels, at the start of the reveal
pub const REVEAL_START_OFFSET: f32 = -20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    started_at: Option<Instant>,
    duration: Duration,
}

impl Reveal {
    pub fn new() -> Self {
        Self {
            started_at: None,
            duration: REVEAL_DURATION,
        }
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            started_at: None,
            duration,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.is_started() && !self.is_finished(now)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.linear_progress(now) >= 1.0
    }

    fn linear_progress(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f32 {
        ease_in_out(self.linear_progress(now))
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        self.progress(now)
    }

    pub fn offset_y(&self, now: Instant) -> f32 {
        REVEAL_START_OFFSET * (1.0 - self.progress(now))
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
