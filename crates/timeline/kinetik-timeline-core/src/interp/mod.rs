//! Interpolation dispatch and easing curves.
//!
//! `functions` blends two values of the same kind; `easing` shapes local
//! progress before the blend.

pub mod easing;
pub mod functions;

pub use easing::Easing;
pub use functions::interpolate;
