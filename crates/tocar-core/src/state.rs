//! Shared contact state for one region.

use crate::event::{ContactId, Phase};
use crate::geometry::Point;
use crate::input::Input;
use crate::region::BindingId;

/// Point-in-time view over the contacts of one region.
///
/// `active` keeps insertion order: the order contacts began. Derived views
/// are recomputed from it on every call, never cached, so they always
/// reflect the latest snapshot. Mutation is reserved to the owning region;
/// recognizers only ever see `&State`.
#[derive(Debug)]
pub struct State {
    active: Vec<Input>,
}

impl State {
    pub(crate) fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Append a freshly begun input. No-op (returns `false`) when an input
    /// with the same id is already live.
    pub(crate) fn add_input(&mut self, input: Input) -> bool {
        if self.active.iter().any(|i| i.id() == input.id()) {
            return false;
        }
        self.active.push(input);
        true
    }

    /// Update the input with `id` in place. No-op (returns `false`) for
    /// unknown ids; device event ordering is not fully trusted.
    pub(crate) fn update_input(&mut self, id: ContactId, position: Point, phase: Phase) -> bool {
        match self.active.iter_mut().find(|i| i.id() == id) {
            Some(input) => {
                input.update(position, phase);
                true
            }
            None => false,
        }
    }

    /// Drop the input with `id`. No-op (returns `false`) for unknown ids.
    pub(crate) fn remove_input(&mut self, id: ContactId) -> bool {
        let before = self.active.len();
        self.active.retain(|i| i.id() != id);
        self.active.len() != before
    }

    /// Drop one binding's scratch slot from every live input.
    pub(crate) fn clear_progress(&mut self, key: BindingId) {
        for input in &self.active {
            input.clear_progress(key);
        }
    }

    /// All live inputs, in the order their contacts began.
    #[must_use]
    pub fn active(&self) -> &[Input] {
        &self.active
    }

    /// Number of live inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no contact is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Look up a live input by contact id.
    #[must_use]
    pub fn input(&self, id: ContactId) -> Option<&Input> {
        self.active.iter().find(|i| i.id() == id)
    }

    /// Current positions of all live inputs.
    #[must_use]
    pub fn active_points(&self) -> Vec<Point> {
        self.active.iter().map(Input::current).collect()
    }

    /// Arithmetic mean of the active points, `None` when no contact is live.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        Point::centroid(&self.active_points())
    }

    /// Live inputs currently in `phase`.
    #[must_use]
    pub fn inputs_in_phase(&self, phase: Phase) -> Vec<&Input> {
        self.active.iter().filter(|i| i.phase() == phase).collect()
    }

    /// Live inputs not yet in a terminal phase.
    ///
    /// During end/cancel dispatch the terminating input is still tracked so
    /// recognizers can inspect it; this view is what they use when only the
    /// contacts staying on the surface should enter the math.
    #[must_use]
    pub fn ongoing(&self) -> Vec<&Input> {
        self.active.iter().filter(|i| !i.phase().is_terminal()).collect()
    }

    /// Current positions of the ongoing inputs.
    #[must_use]
    pub fn ongoing_points(&self) -> Vec<Point> {
        self.active
            .iter()
            .filter(|i| !i.phase().is_terminal())
            .map(Input::current)
            .collect()
    }
}
