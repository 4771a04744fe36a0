//! Time-keyed animation
//!
//! Tweens interpolate an [`Interpolatable`] value between two endpoints over a
//! fixed duration in milliseconds, shaped by an [`Easing`] curve. They advance
//! by the same frame delta the physics step receives, so flight and cosmetic
//! animation stay in lockstep.

mod easing;
mod interpolate;
mod tween;

pub use easing::Easing;
pub use interpolate::Interpolatable;
pub use tween::Tween;
