//! Multi-touch gesture recognition engine.
//!
//! Converts a stream of raw contact lifecycle events (begin, move, end,
//! cancel) from any number of concurrent contacts into semantic gestures
//! delivered to registered callbacks:
//! - Geometric primitives: [`Point`]
//! - Contact tracking: [`Input`], [`State`]
//! - Boundary events: [`ContactEvent`] in, [`GestureEvent`] out
//! - Recognition: [`GestureSpec`] selecting tap, pan, pinch, or rotate
//! - Intake and dispatch: [`Region`] with disposable [`BindingId`] handles

mod error;
mod event;
mod geometry;
mod gesture;
mod input;
mod pan;
mod pinch;
mod region;
mod rotate;
mod state;
mod tap;

pub use error::ConfigError;
pub use event::{ContactEvent, ContactId, GestureEvent, Phase};
pub use geometry::Point;
pub use gesture::{GestureSpec, PanConfig, PinchConfig, TapConfig};
pub use input::Input;
pub use region::{BindingId, GestureCallback, Region};
pub use state::State;
