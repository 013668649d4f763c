//! Tap: a quick touch released near where it began.

use crate::event::{GestureEvent, Phase};
use crate::gesture::{Gesture, TapConfig};
use crate::region::BindingId;
use crate::state::State;
use std::time::{Duration, Instant};

/// Recognized on the terminal phase: exactly one contact involved, released
/// within `tolerance` pixels of its begin position and inside the time
/// window. The begin instant is stashed in the contact's progress slot
/// under this binding's key, so the recognizer itself stays stateless
/// across contacts.
pub(crate) struct TapGesture {
    config: TapConfig,
    key: BindingId,
}

impl TapGesture {
    pub(crate) const fn new(config: TapConfig, key: BindingId) -> Self {
        Self { config, key }
    }
}

impl Gesture for TapGesture {
    fn on_start(&mut self, state: &State) -> Option<GestureEvent> {
        for input in state.inputs_in_phase(Phase::Start) {
            // Stamp once per contact: a later begin must not reopen an
            // earlier contact's window.
            if input.progress::<Instant>(self.key).is_none() {
                input.set_progress(self.key, Instant::now());
            }
        }
        None
    }

    fn on_move(&mut self, _state: &State) -> Option<GestureEvent> {
        None
    }

    fn on_end(&mut self, state: &State) -> Option<GestureEvent> {
        // Exactly one contact may be involved, and it must be the ending one.
        if state.len() != 1 {
            return None;
        }
        let input = state.active().first()?;
        if input.phase() != Phase::End {
            return None;
        }
        let began: Instant = input.progress(self.key)?;
        if began.elapsed() >= Duration::from_millis(self.config.timeout_ms) {
            return None;
        }
        if input.initial().distance(&input.current()) >= self.config.tolerance {
            return None;
        }
        Some(GestureEvent::Tap {
            position: input.current(),
        })
    }

    fn on_cancel(&mut self, _state: &State) -> Option<GestureEvent> {
        // A lost contact is never a tap; the stale slot dies with the input.
        None
    }
}
