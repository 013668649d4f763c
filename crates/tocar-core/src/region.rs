//! Region: the event-intake boundary.
//!
//! A region owns one contact [`State`] and an ordered list of bindings.
//! Raw device events come in through [`Region::handle_event`]; recognized
//! results go out synchronously through the bindings' callbacks.

use crate::error::ConfigError;
use crate::event::{ContactEvent, ContactId, GestureEvent, Phase};
use crate::geometry::Point;
use crate::gesture::{Gesture, GestureSpec};
use crate::input::Input;
use crate::state::State;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to one registered binding, returned by [`Region::bind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingId(pub u64);

/// Callback invoked synchronously with each recognized result and the raw
/// event that produced it.
pub type GestureCallback = Box<dyn FnMut(&GestureEvent, &ContactEvent) + Send>;

/// One registered pairing of a gesture instance and its callback.
///
/// Instances are never shared: two bindings of the same variant each get
/// their own recognizer memory.
struct Binding {
    id: BindingId,
    spec: GestureSpec,
    gesture: Box<dyn Gesture>,
    callback: GestureCallback,
}

/// The event-intake boundary owning one [`State`] and its bindings.
///
/// Registration order is dispatch order. A region is `Send` but not
/// `Sync`: drive it from one logical thread at a time.
pub struct Region {
    state: State,
    bindings: Vec<Binding>,
    next_binding: u64,
}

impl Region {
    /// Create a region with no contacts and no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::new(),
            bindings: Vec::new(),
            next_binding: 1,
        }
    }

    /// Register a gesture with its callback; returns the disposable handle.
    ///
    /// Malformed configuration is rejected here and nothing is registered.
    pub fn bind(
        &mut self,
        spec: GestureSpec,
        callback: GestureCallback,
    ) -> Result<BindingId, ConfigError> {
        spec.validate()?;
        let id = BindingId(self.next_binding);
        self.next_binding += 1;
        let gesture = spec.build(id);
        self.bindings.push(Binding {
            id,
            spec,
            gesture,
            callback,
        });
        debug!("bound {spec:?} as {id:?}");
        Ok(id)
    }

    /// Release a binding and sweep its scratch slots from live contacts.
    ///
    /// Idempotent: returns `false` when the handle was already released,
    /// and other bindings are untouched either way.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let Some(index) = self.bindings.iter().position(|b| b.id == id) else {
            debug!("unbind on already released handle {id:?}");
            return false;
        };
        let binding = self.bindings.remove(index);
        self.state.clear_progress(id);
        debug!("released {:?} ({:?})", binding.id, binding.spec);
        true
    }

    /// Number of live bindings.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Read-only view of the tracked contacts.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Feed one raw device event through the engine.
    ///
    /// Mutates the state, runs the phase-matching hook on every binding in
    /// registration order, forwards recognized results to their callbacks,
    /// then discards the contact if the phase was terminal. Events that do
    /// not apply to the state (unknown id, duplicate begin) are dropped
    /// before dispatch; device sources may redeliver or race.
    pub fn handle_event(&mut self, event: ContactEvent) {
        let applied = match event.phase {
            Phase::Start => self.state.add_input(Input::new(event.id, event.position)),
            Phase::Move | Phase::End | Phase::Cancel => {
                self.state
                    .update_input(event.id, event.position, event.phase)
            }
        };
        if !applied {
            debug!(
                "dropping {:?} for contact {:?}: does not apply",
                event.phase, event.id
            );
            return;
        }

        for binding in &mut self.bindings {
            let result = match event.phase {
                Phase::Start => binding.gesture.on_start(&self.state),
                Phase::Move => binding.gesture.on_move(&self.state),
                Phase::End => binding.gesture.on_end(&self.state),
                Phase::Cancel => binding.gesture.on_cancel(&self.state),
            };
            if let Some(result) = result {
                trace!("{:?} recognized {result:?}", binding.id);
                (binding.callback)(&result, &event);
            }
        }

        if event.phase.is_terminal() {
            self.state.remove_input(event.id);
        }
    }

    /// Cancel every ongoing contact at its current position, e.g. when the
    /// surface loses its input source. Recognizers see ordinary cancel
    /// hooks; afterwards no contact is tracked.
    pub fn cancel_all(&mut self) {
        let snapshot: Vec<(ContactId, Point)> = self
            .state
            .active()
            .iter()
            .map(|input| (input.id(), input.current()))
            .collect();
        for (id, position) in snapshot {
            self.handle_event(ContactEvent::cancel(id, position));
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("state", &self.state)
            .field("bindings", &self.bindings.len())
            .field("next_binding", &self.next_binding)
            .finish()
    }
}
