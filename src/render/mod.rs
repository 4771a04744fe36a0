//! Render binding contract
//!
//! The core never draws. It describes the static scene once and hands the
//! character pose to a [`TransformSink`] every frame; the host's 3D engine
//! does the rest.

pub mod camera;
pub mod scene;
pub mod sink;
pub mod table;

pub use camera::OrbitCamera;
pub use scene::{CharacterModel, HemisphericLight, ModelPart, PartShape, SceneBlueprint, SkyBox};
pub use sink::{CharacterPose, LogSink, TransformSink};
pub use table::{PlatformCube, TableManager};
