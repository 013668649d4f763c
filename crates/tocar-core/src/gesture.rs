//! Recognizer contract and per-variant configuration.

use crate::error::ConfigError;
use crate::event::GestureEvent;
use crate::pan::PanGesture;
use crate::pinch::PinchGesture;
use crate::region::BindingId;
use crate::rotate::RotateGesture;
use crate::state::State;
use crate::tap::TapGesture;

/// Phase hooks shared by every recognizer.
///
/// Each hook sees the owning region's state read-only; private memory lives
/// inside the implementation or in per-contact progress slots. `None` means
/// "not recognized this call" and suppresses dispatch for that binding
/// only. The set of implementations is closed; the hook contract and state
/// access pattern are fixed.
pub(crate) trait Gesture: Send {
    /// A contact touched down.
    fn on_start(&mut self, state: &State) -> Option<GestureEvent>;
    /// A contact moved.
    fn on_move(&mut self, state: &State) -> Option<GestureEvent>;
    /// A contact lifted; it is still visible in the state, phase `End`.
    fn on_end(&mut self, state: &State) -> Option<GestureEvent>;
    /// A contact was lost; it is still visible in the state, phase `Cancel`.
    fn on_cancel(&mut self, state: &State) -> Option<GestureEvent>;
}

/// Tap recognition knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapConfig {
    /// Pixel radius around the begin position the release must fall inside
    /// (strict comparison).
    pub tolerance: f32,
    /// Time window in milliseconds between begin and release (strict
    /// comparison).
    pub timeout_ms: u64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            tolerance: 10.0,
            timeout_ms: 300,
        }
    }
}

/// Pan recognition knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanConfig {
    /// Contacts that must be down before moves are recognized.
    pub min_inputs: usize,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self { min_inputs: 1 }
    }
}

/// Pinch recognition knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinchConfig {
    /// Contacts that must be down before moves are recognized.
    pub min_inputs: usize,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self { min_inputs: 2 }
    }
}

/// Selects a gesture variant and its configuration when binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureSpec {
    /// Quick touch released near its begin position.
    Tap(TapConfig),
    /// Centroid translation of at least `min_inputs` contacts.
    Pan(PanConfig),
    /// Scale change of at least `min_inputs` contacts.
    Pinch(PinchConfig),
    /// Twist of exactly two contacts.
    Rotate,
}

impl GestureSpec {
    /// Tap with the default tolerance and time window.
    #[must_use]
    pub fn tap() -> Self {
        Self::Tap(TapConfig::default())
    }

    /// Single-contact pan.
    #[must_use]
    pub fn pan() -> Self {
        Self::Pan(PanConfig::default())
    }

    /// Pan that waits for two contacts; bind alongside [`GestureSpec::pan`]
    /// when both modes are wanted.
    #[must_use]
    pub const fn two_finger_pan() -> Self {
        Self::Pan(PanConfig { min_inputs: 2 })
    }

    /// Two-contact pinch.
    #[must_use]
    pub fn pinch() -> Self {
        Self::Pinch(PinchConfig::default())
    }

    /// Two-contact rotation.
    #[must_use]
    pub const fn rotate() -> Self {
        Self::Rotate
    }

    /// Reject malformed configuration before anything is registered.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Tap(config) => {
                if !config.tolerance.is_finite() || config.tolerance < 0.0 {
                    return Err(ConfigError::InvalidTolerance(config.tolerance));
                }
                Ok(())
            }
            Self::Pan(PanConfig { min_inputs }) | Self::Pinch(PinchConfig { min_inputs })
                if min_inputs == 0 =>
            {
                Err(ConfigError::InvalidMinInputs(0))
            }
            Self::Pan(_) | Self::Pinch(_) | Self::Rotate => Ok(()),
        }
    }

    /// Build a fresh recognizer with its own private memory.
    pub(crate) fn build(&self, key: BindingId) -> Box<dyn Gesture> {
        match *self {
            Self::Tap(config) => Box::new(TapGesture::new(config, key)),
            Self::Pan(config) => Box::new(PanGesture::new(config)),
            Self::Pinch(config) => Box::new(PinchGesture::new(config)),
            Self::Rotate => Box::new(RotateGesture::new()),
        }
    }
}
