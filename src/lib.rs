//! # toss-jump
//!
//! Core of a small 3D toss/jump game: a character that squashes while the
//! pointer is held, launches on release, spins through a ballistic arc and
//! springs back into shape on landing. Rendering belongs to the host's 3D
//! engine; this crate only produces poses.
//!
//! ## Features
//! - Press/charge/release state machine with explicit-Euler flight
//! - Elastic rebound and flight spin driven by cancellable tweens
//! - Static scene blueprint and platform bookkeeping for the host
//! - Cross-platform: Native + WASM support
//!
//! ## Example
//! ```rust,ignore
//! use toss_jump::{Character, GameConfig, ManualClock};
//! use glam::DVec3;
//!
//! let clock = ManualClock::new();
//! let mut character = Character::new(GameConfig::STANDARD, clock.clone());
//!
//! character.press();
//! clock.advance(1000.0);
//! character.update(1000.0);
//! character.release(DVec3::ZERO);
//!
//! while character.status().is_airborne() {
//!     character.update(16.0);
//! }
//! println!("landed at {:?}", character.position());
//! ```

pub mod character;
pub mod clock;
pub mod config;
pub mod dynamics;
pub mod math;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use character::{Character, CharacterStatus, LaunchVelocity, ReboundPose};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use config::{ChargeTuning, GameConfig};
pub use dynamics::{Easing, Interpolatable, Tween};
pub use math::Transform;
pub use render::{CharacterPose, LogSink, SceneBlueprint, TableManager, TransformSink};
