//! Visibility of the value label shown above the thumbs.
//!
//! The label appears as soon as a gesture starts and fades a fixed delay
//! after the gesture ends. The delay is a deadline polled by the host with
//! the current [`Instant`]; there is at most one pending deadline per label,
//! and scheduling a new one replaces the old.

use std::time::{Duration, Instant};

use tracing::trace;

/// Delay between the end of a gesture and the label hiding.
pub const DEFAULT_LABEL_VISIBILITY: Duration = Duration::from_millis(750);

/// Label visibility plus its pending hide deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbLabel {
    visible: bool,
    hide_at: Option<Instant>,
    duration: Duration,
}

impl Default for ThumbLabel {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_VISIBILITY)
    }
}

impl ThumbLabel {
    /// Creates a hidden label that fades `duration` after a gesture ends.
    pub fn new(duration: Duration) -> Self {
        Self {
            visible: false,
            hide_at: None,
            duration,
        }
    }

    /// Whether the label is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The pending hide deadline, if any.
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Delay applied by [`ThumbLabel::schedule_hide`].
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Changes the hide delay for future deadlines.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Shows the label and cancels a pending hide.
    pub fn show(&mut self) {
        if self.hide_at.take().is_some() {
            trace!("cancelled pending label hide");
        }
        self.visible = true;
    }

    /// Schedules a hide `duration` after `now`, replacing any pending one.
    pub fn schedule_hide(&mut self, now: Instant) {
        let deadline = now + self.duration;
        trace!(?deadline, "scheduled label hide");
        self.hide_at = Some(deadline);
    }

    /// Hides the label immediately and drops any pending deadline.
    pub fn hide(&mut self) {
        self.hide_at = None;
        self.visible = false;
    }

    /// Applies an elapsed deadline. Returns whether the label is visible.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.hide_at
            && now >= deadline
        {
            trace!("label hide deadline elapsed");
            self.hide();
        }
        self.visible
    }
}
