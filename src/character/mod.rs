//! Jumping character
//!
//! The character charges while the pointer is held, launches on release,
//! follows an explicit-Euler ballistic arc while spinning, and snaps back onto
//! the ground plane when the precomputed flight time runs out.

pub mod launch;
pub mod rebound;
pub mod state;
pub mod status;

pub use launch::LaunchVelocity;
pub use rebound::ReboundPose;
pub use state::Character;
pub use status::CharacterStatus;
