//! Pan: centroid translation across the surface.

use crate::event::GestureEvent;
use crate::geometry::Point;
use crate::gesture::{Gesture, PanConfig};
use crate::state::State;

/// Emits the centroid plus its one-step displacement on every move with at
/// least `min_inputs` ongoing contacts. The recorded centroid resyncs on
/// every start/end/cancel, so a contact joining or leaving never reads as
/// motion.
pub(crate) struct PanGesture {
    config: PanConfig,
    previous_centroid: Option<Point>,
}

impl PanGesture {
    pub(crate) const fn new(config: PanConfig) -> Self {
        Self {
            config,
            previous_centroid: None,
        }
    }

    fn refresh(&mut self, state: &State) {
        self.previous_centroid = Point::centroid(&state.ongoing_points());
    }
}

impl Gesture for PanGesture {
    fn on_start(&mut self, state: &State) -> Option<GestureEvent> {
        self.refresh(state);
        None
    }

    fn on_move(&mut self, state: &State) -> Option<GestureEvent> {
        let points = state.ongoing_points();
        if points.len() < self.config.min_inputs {
            return None;
        }
        let centroid = Point::centroid(&points)?;
        let Some(previous) = self.previous_centroid else {
            self.previous_centroid = Some(centroid);
            return None;
        };
        self.previous_centroid = Some(centroid);
        Some(GestureEvent::Pan {
            position: centroid,
            delta: centroid - previous,
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
