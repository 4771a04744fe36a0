//! Math utilities module
//!
//! Provides re-exports from glam and the transform type handed to render hosts.
//! Everything runs in `f64`: the timing constants are tiny per-millisecond
//! rates and the host side (JS numbers) is double precision as well.

mod transform;

pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::{DQuat, DVec3};
