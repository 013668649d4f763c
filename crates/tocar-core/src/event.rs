//! Event types crossing the engine boundary.
//!
//! Raw device events come in as [`ContactEvent`] (one normalized shape, the
//! phase tells the region what happened); recognized gestures go out as
//! [`GestureEvent`] payloads.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Opaque device-assigned identifier for one contact.
///
/// Unique among concurrently active contacts; the device may recycle ids
/// after a contact ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub u32);

impl ContactId {
    /// Create a new contact id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Lifecycle phase of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Contact just touched down.
    Start,
    /// Contact moved while down.
    Move,
    /// Contact lifted cleanly.
    End,
    /// Contact was lost without a clean release.
    Cancel,
}

impl Phase {
    /// Whether this phase terminates the contact.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::End | Self::Cancel)
    }
}

/// One normalized raw input event.
///
/// Pointer, touch, and wheel sources are collapsed to this shape upstream;
/// the engine has no opinion on where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactEvent {
    /// Which contact this event belongs to.
    pub id: ContactId,
    /// Position at the time of the event.
    pub position: Point,
    /// What happened.
    pub phase: Phase,
}

impl ContactEvent {
    /// A contact touched down at `position`.
    #[must_use]
    pub const fn begin(id: ContactId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: Phase::Start,
        }
    }

    /// A contact moved to `position`.
    #[must_use]
    pub const fn moved(id: ContactId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: Phase::Move,
        }
    }

    /// A contact lifted at `position`.
    #[must_use]
    pub const fn end(id: ContactId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: Phase::End,
        }
    }

    /// A contact was lost; `position` is the last known position.
    #[must_use]
    pub const fn cancel(id: ContactId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: Phase::Cancel,
        }
    }
}

/// A recognized gesture result, one shape per variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// A quick touch released near where it began.
    Tap {
        /// Release position.
        position: Point,
    },
    /// Contacts translated across the surface.
    Pan {
        /// Current centroid of the contacts.
        position: Point,
        /// Centroid displacement since the previous recognition.
        delta: Point,
    },
    /// Contacts spread apart or squeezed together.
    Pinch {
        /// Current mean distance from the centroid to each contact.
        distance: f32,
        /// Current centroid of the contacts.
        midpoint: Point,
        /// Multiplicative scale factor since the previous recognition;
        /// consecutive values compose.
        change: f32,
    },
    /// Two contacts twisted around each other.
    Rotate {
        /// Signed rotation in radians since the previous recognition.
        angle_delta: f32,
    },
}

impl GestureEvent {
    /// Representative position of the result, if the variant carries one.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Tap { position } | Self::Pan { position, .. } => Some(*position),
            Self::Pinch { midpoint, .. } => Some(*midpoint),
            Self::Rotate { .. } => None,
        }
    }
}
