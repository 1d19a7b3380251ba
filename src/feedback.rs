// SPDX-License-Identifier: GPL-3.0-only

//! Scan result feedback
//!
//! The overlay flashes green after a successful decode and red after a failed
//! one, then falls back to its neutral tone once the reset delay has passed.
//!
//! Resets are deferred callbacks, so a reset armed by an earlier signal may
//! arrive after a newer signal has been shown. Every signal arms a timer with a
//! fresh [`TimerId`] and only the most recently armed timer may reset the
//! overlay; older ones are ignored when they fire.

use crate::constants::timing;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Source of timer ids, shared by every indicator in the process
///
/// Ids never repeat, so a timer armed by an indicator that has since been
/// dropped can never match the armed timer of another one.
static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// Overlay color token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeedbackTone {
    #[default]
    Neutral,
    /// Decode succeeded (green)
    Success,
    /// Decode failed (red)
    Failure,
}

/// Identity of an armed reset timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    fn next() -> Self {
        TimerId(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A reset armed by a signal
///
/// The deadline is fixed when the signal fires, so the delay counts from the
/// signal and not from when the host starts waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimer {
    id: TimerId,
    deadline: Instant,
}

impl ResetTimer {
    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Wait for the deadline and hand back the timer id
    pub async fn elapsed(self) -> TimerId {
        tokio::time::sleep_until(self.deadline).await;
        self.id
    }
}

/// Feedback state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackState {
    #[default]
    Neutral,
    Signaling { tone: FeedbackTone, timer: TimerId },
}

/// Sole writer of the overlay tone
#[derive(Debug)]
pub struct FeedbackIndicator {
    state: FeedbackState,
    delay: Duration,
}

impl Default for FeedbackIndicator {
    fn default() -> Self {
        Self::new(timing::FEEDBACK_RESET_DELAY)
    }
}

impl FeedbackIndicator {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: FeedbackState::Neutral,
            delay,
        }
    }

    pub fn state(&self) -> FeedbackState {
        self.state
    }

    /// Tone the overlay should currently be drawn with
    pub fn tone(&self) -> FeedbackTone {
        match self.state {
            FeedbackState::Neutral => FeedbackTone::Neutral,
            FeedbackState::Signaling { tone, .. } => tone,
        }
    }

    /// The timer allowed to reset the overlay, if any
    pub fn armed_timer(&self) -> Option<TimerId> {
        match self.state {
            FeedbackState::Neutral => None,
            FeedbackState::Signaling { timer, .. } => Some(timer),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Show the success tone and arm a new reset timer
    pub fn signal_success(&mut self) -> ResetTimer {
        self.signal(FeedbackTone::Success)
    }

    /// Show the failure tone and arm a new reset timer
    pub fn signal_failure(&mut self) -> ResetTimer {
        self.signal(FeedbackTone::Failure)
    }

    fn signal(&mut self, tone: FeedbackTone) -> ResetTimer {
        let timer = ResetTimer {
            id: TimerId::next(),
            deadline: Instant::now() + self.delay,
        };
        if let Some(superseded) = self.armed_timer() {
            debug!(?superseded, "Superseding armed reset timer");
        }
        self.state = FeedbackState::Signaling {
            tone,
            timer: timer.id,
        };
        debug!(
            ?tone,
            timer = ?timer.id,
            delay_ms = self.delay.as_millis() as u64,
            "Feedback signaled"
        );
        timer
    }

    /// Return to neutral if `timer` is the armed one
    ///
    /// Returns false for a timer that was superseded or already fired.
    pub fn reset(&mut self, timer: TimerId) -> bool {
        match self.state {
            FeedbackState::Signaling { timer: armed, .. } if armed == timer => {
                self.state = FeedbackState::Neutral;
                debug!(?timer, "Feedback reset to neutral");
                true
            }
            _ => {
                debug!(?timer, "Ignoring stale reset timer");
                false
            }
        }
    }

    /// Invalidate any armed timer and return to neutral
    pub fn disarm(&mut self) {
        self.state = FeedbackState::Neutral;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_neutral() {
        let indicator = FeedbackIndicator::default();
        assert_eq!(indicator.state(), FeedbackState::Neutral);
        assert_eq!(indicator.tone(), FeedbackTone::Neutral);
        assert_eq!(indicator.delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_stale_timer_cannot_override_newer_signal() {
        let mut indicator = FeedbackIndicator::default();
        let green = indicator.signal_success();
        let red = indicator.signal_failure();

        assert!(!indicator.reset(green.id()));
        assert_eq!(indicator.tone(), FeedbackTone::Failure);

        assert!(indicator.reset(red.id()));
        assert_eq!(indicator.tone(), FeedbackTone::Neutral);
    }

    #[test]
    fn test_reset_fires_once() {
        let mut indicator = FeedbackIndicator::default();
        let timer = indicator.signal_failure();
        assert!(indicator.reset(timer.id()));
        assert!(!indicator.reset(timer.id()));
    }

    #[test]
    fn test_timer_ids_unique_across_indicators() {
        let mut first = FeedbackIndicator::default();
        let mut second = FeedbackIndicator::default();
        let a = first.signal_success();
        let b = second.signal_success();
        assert_ne!(a.id(), b.id());
        assert!(!second.reset(a.id()));
    }

    #[test]
    fn test_disarm_invalidates_pending_timer() {
        let mut indicator = FeedbackIndicator::default();
        let timer = indicator.signal_success();
        indicator.disarm();
        assert_eq!(indicator.tone(), FeedbackTone::Neutral);
        assert!(!indicator.reset(timer.id()));
    }
}
