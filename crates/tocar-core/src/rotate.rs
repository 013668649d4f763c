//! Rotate: twist of exactly two contacts.

use crate::event::GestureEvent;
use crate::gesture::Gesture;
use crate::state::State;
use std::f32::consts::{PI, TAU};

/// Tracks the angle of the line through the two ongoing contacts and emits
/// the signed per-move delta in radians. Any other contact count is not
/// recognized: the exactly-two restriction is the contract, not a tunable
/// minimum.
pub(crate) struct RotateGesture {
    previous_angle: Option<f32>,
}

impl RotateGesture {
    pub(crate) const fn new() -> Self {
        Self {
            previous_angle: None,
        }
    }

    /// Angle of the line from the first ongoing contact to the second, in
    /// the order the contacts began. `None` unless exactly two are down.
    fn line_angle(state: &State) -> Option<f32> {
        match state.ongoing_points().as_slice() {
            [first, second] => Some(first.angle_to(second)),
            _ => None,
        }
    }

    fn refresh(&mut self, state: &State) {
        self.previous_angle = Self::line_angle(state);
    }
}

/// Fold a raw angular difference into (-PI, PI], so a line crossing the
/// +-PI direction between two events reads as the small motion it was.
fn wrap_angle(raw: f32) -> f32 {
    let mut angle = raw % TAU;
    if angle > PI {
        angle -= TAU;
    } else if angle <= -PI {
        angle += TAU;
    }
    angle
}

impl Gesture for RotateGesture {
    fn on_start(&mut self, state: &State) -> Option<GestureEvent> {
        self.refresh(state);
        None
    }

    fn on_move(&mut self, state: &State) -> Option<GestureEvent> {
        let angle = Self::line_angle(state)?;
        let Some(previous) = self.previous_angle else {
            self.previous_angle = Some(angle);
            return None;
        };
        self.previous_angle = Some(angle);
        Some(GestureEvent::Rotate {
            angle_delta: wrap_angle(angle - previous),
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
