use std::time::Instant;

use tracing::trace;

use super::RangeSlider;
use crate::{
    geometry::GeometryAdapter,
    handle::{SliderHandle, closest_handle},
    pointer::{GestureEvent, GestureKind, sample_pointer},
    value::ValueUpdate,
};

/// Pointer drag state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is moving `handle`. The handle is fixed until the gesture
    /// ends.
    Active {
        /// The thumb this gesture moves.
        handle: SliderHandle,
    },
}

/// What a gesture event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A move arrived while no gesture was active.
    Ignored,
    /// The event was processed against `handle`.
    Applied {
        /// The thumb the event moved (or tried to move).
        handle: SliderHandle,
        /// Outcome of the value update.
        update: ValueUpdate,
    },
}

impl<G: GeometryAdapter> RangeSlider<G> {
    /// Feeds one pointer event through the drag state machine.
    ///
    /// Every processed event measures the geometry once, converts the
    /// pointer to a fraction, moves the gesture's thumb there (the other
    /// thumb stays put), redraws, and notifies `on_change` if the value
    /// changed. A gesture start or tap first picks the nearest thumb; end,
    /// cancel and tap close the gesture, schedule the label hide `now +
    /// duration`, and notify `on_touched`.
    pub fn handle_gesture(&mut self, event: GestureEvent, now: Instant) -> GestureOutcome {
        let kind = event.kind;
        if !kind.begins() && self.drag == DragState::Idle {
            trace!(?kind, "ignoring gesture event outside a drag");
            return GestureOutcome::Ignored;
        }

        let axis = self.model.mode().axis();
        let sample = sample_pointer(&self.geometry, axis, event.position, &self.model);
        self.last_pointer = Some(sample);

        let handle = match self.drag {
            DragState::Active { handle } if !kind.begins() => handle,
            _ => {
                let handle = self.select_handle(sample.pointer);
                self.active_handle = handle;
                self.drag = DragState::Active { handle };
                trace!(?handle, "gesture started");
                handle
            }
        };

        let target = self.model.to_value(sample.fraction);
        let update = self.commit_handle(handle, target);
        self.label.show();

        if kind.finishes() {
            self.drag = DragState::Idle;
            self.label.schedule_hide(now);
            self.on_touched.call();
            trace!(?kind, "gesture finished");
        }

        GestureOutcome::Applied { handle, update }
    }

    /// Nearest thumb to `pointer` (track-relative pixels); single-thumb
    /// sliders always move the upper thumb.
    fn select_handle(&self, pointer: f64) -> SliderHandle {
        if !self.model.is_dual() {
            return SliderHandle::Upper;
        }
        let axis = self.model.mode().axis();
        let lower = self.geometry.thumb_extent(SliderHandle::Lower, axis).center();
        let upper = self.geometry.thumb_extent(SliderHandle::Upper, axis).center();
        closest_handle(pointer, lower, upper, self.active_handle)
    }
}
