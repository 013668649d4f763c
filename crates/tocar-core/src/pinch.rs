//! Pinch: radial spread or squeeze of the contact set.

use crate::event::GestureEvent;
use crate::geometry::Point;
use crate::gesture::{Gesture, PinchConfig};
use crate::state::State;

/// Tracks the mean centroid-to-contact distance. Each move with at least
/// `min_inputs` ongoing contacts emits that distance, the centroid, and the
/// multiplicative `change` against the previous call, so consecutive
/// changes compose into total scale. Refreshes on start/end/cancel keep a
/// contact-count change from reading as a zoom.
pub(crate) struct PinchGesture {
    config: PinchConfig,
    previous_distance: Option<f32>,
}

impl PinchGesture {
    pub(crate) const fn new(config: PinchConfig) -> Self {
        Self {
            config,
            previous_distance: None,
        }
    }

    /// Mean centroid-to-point distance of the ongoing contacts, when at
    /// least `min_inputs` of them are down.
    fn spread(&self, state: &State) -> Option<f32> {
        let points = state.ongoing_points();
        if points.len() < self.config.min_inputs {
            return None;
        }
        Point::centroid(&points)?.average_distance(&points)
    }

    fn refresh(&mut self, state: &State) {
        self.previous_distance = self.spread(state);
    }
}

impl Gesture for PinchGesture {
    fn on_start(&mut self, state: &State) -> Option<GestureEvent> {
        self.refresh(state);
        None
    }

    fn on_move(&mut self, state: &State) -> Option<GestureEvent> {
        let points = state.ongoing_points();
        if points.len() < self.config.min_inputs {
            return None;
        }
        let midpoint = Point::centroid(&points)?;
        let distance = midpoint.average_distance(&points)?;
        let Some(previous) = self.previous_distance else {
            self.previous_distance = Some(distance);
            return None;
        };
        // Resync before the zero guard: a coincident previous frame must
        // not poison the next ratio.
        self.previous_distance = Some(distance);
        if previous == 0.0 {
            return None;
        }
        Some(GestureEvent::Pinch {
            distance,
            midpoint,
            change: distance / previous,
        })
    }

    fn on_end(&mut self, state: &State) -> Option<GestureEvent> {
        self.refresh(state);
        None
    }

    fn on_cancel(&mut self, state: &State) -> Option<GestureEvent> {
        self.refresh(state);
        None
    }
}
