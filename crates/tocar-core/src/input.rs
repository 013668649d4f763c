//! Per-contact lifecycle tracking.

use crate::event::{ContactId, Phase};
use crate::geometry::Point;
use crate::region::BindingId;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// One physical contact, tracked from its begin event to its end/cancel.
///
/// Owned by the region's [`State`](crate::State) for its whole lifetime and
/// never shared across regions. `previous` always holds the position
/// immediately prior to the latest update, so one-step deltas need no
/// history buffer.
pub struct Input {
    id: ContactId,
    initial: Point,
    previous: Point,
    current: Point,
    phase: Phase,
    /// Per-binding scratch slots. Interior-mutable so recognizers can stash
    /// contact-scoped state through the shared `&State` view; the engine is
    /// single-threaded per region.
    progress: RefCell<HashMap<BindingId, Box<dyn Any + Send>>>,
}

impl Input {
    pub(crate) fn new(id: ContactId, position: Point) -> Self {
        Self {
            id,
            initial: position,
            previous: position,
            current: position,
            phase: Phase::Start,
            progress: RefCell::new(HashMap::new()),
        }
    }

    /// Shift `previous` to the old `current`, then apply the new position
    /// and phase.
    pub(crate) fn update(&mut self, position: Point, phase: Phase) {
        self.previous = self.current;
        self.current = position;
        self.phase = phase;
    }

    /// Device-assigned contact id.
    #[must_use]
    pub const fn id(&self) -> ContactId {
        self.id
    }

    /// Position where the contact began.
    #[must_use]
    pub const fn initial(&self) -> Point {
        self.initial
    }

    /// Position before the latest update.
    #[must_use]
    pub const fn previous(&self) -> Point {
        self.previous
    }

    /// Latest known position.
    #[must_use]
    pub const fn current(&self) -> Point {
        self.current
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// One-step displacement: `current - previous`.
    #[must_use]
    pub fn delta(&self) -> Point {
        self.current - self.previous
    }

    /// Read this binding's scratch slot, if present and of type `T`.
    #[must_use]
    pub fn progress<T: Any + Copy>(&self, key: BindingId) -> Option<T> {
        self.progress
            .borrow()
            .get(&key)
            .and_then(|slot| slot.downcast_ref::<T>())
            .copied()
    }

    /// Write this binding's scratch slot, replacing any previous value.
    pub fn set_progress<T: Any + Send>(&self, key: BindingId, value: T) {
        self.progress.borrow_mut().insert(key, Box::new(value));
    }

    /// Drop this binding's scratch slot.
    pub fn clear_progress(&self, key: BindingId) {
        self.progress.borrow_mut().remove(&key);
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("id", &self.id)
            .field("initial", &self.initial)
            .field("previous", &self.previous)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
