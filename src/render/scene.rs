//! Static scene description.
//!
//! None of this moves. Hosts read the blueprint once and build the matching
//! engine objects; afterwards only the character pose changes per frame.

use glam::DVec3;

use super::camera::OrbitCamera;
use crate::config::GameConfig;

pub type Color = [f64; 3];

pub const WHITE: Color = [1.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphericLight {
    pub direction: DVec3,
    pub intensity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyBox {
    pub size: f64,
    pub emissive: Color,
    pub back_face_culling: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    Sphere { diameter: f64 },
    Cylinder { height: f64, diameter_top: f64, diameter_bottom: f64 },
}

/// One primitive of the character model, positioned in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPart {
    pub name: &'static str,
    pub shape: PartShape,
    pub offset: DVec3,
}

/// Primitives that make up the character. The body parts are merged into a
/// single body mesh that receives `body_scale`; the head receives
/// `head_offset_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterModel {
    pub head: ModelPart,
    pub body: Vec<ModelPart>,
    pub color: Color,
}

impl ModelPart {
    /// Values per part in [`CharacterModel::to_flat`].
    pub const FLAT_LEN: usize = 7;

    /// `[kind, a, b, c, offset_x, offset_y, offset_z]`. Spheres are kind 0
    /// with `a` the diameter; cylinders are kind 1 with height, top and
    /// bottom diameter.
    pub fn to_array(&self) -> [f64; Self::FLAT_LEN] {
        let [kind, a, b, c] = match self.shape {
            PartShape::Sphere { diameter } => [0.0, diameter, 0.0, 0.0],
            PartShape::Cylinder {
                height,
                diameter_top,
                diameter_bottom,
            } => [1.0, height, diameter_top, diameter_bottom],
        };
        let o = self.offset;
        [kind, a, b, c, o.x, o.y, o.z]
    }
}

impl CharacterModel {
    /// Head first, then the body parts to merge, one
    /// [`ModelPart::to_array`] block each.
    pub fn to_flat(&self) -> Vec<f64> {
        std::iter::once(&self.head)
            .chain(&self.body)
            .flat_map(ModelPart::to_array)
            .collect()
    }

    pub fn standard() -> Self {
        Self {
            head: ModelPart {
                name: "role-head",
                shape: PartShape::Sphere { diameter: 5.0 },
                offset: DVec3::new(0.0, 10.0, 0.0),
            },
            body: vec![
                ModelPart {
                    name: "role-body-bottom",
                    shape: PartShape::Cylinder {
                        height: 5.0,
                        diameter_top: 3.0,
                        diameter_bottom: 5.0,
                    },
                    offset: DVec3::ZERO,
                },
                ModelPart {
                    name: "role-body-middle",
                    shape: PartShape::Cylinder {
                        height: 2.5,
                        diameter_top: 4.0,
                        diameter_bottom: 3.0,
                    },
                    offset: DVec3::new(0.0, 2.5, 0.0),
                },
                ModelPart {
                    name: "role-body-sphere",
                    shape: PartShape::Sphere { diameter: 4.0 },
                    offset: DVec3::new(0.0, 4.0, 0.0),
                },
            ],
            color: WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneBlueprint {
    pub camera: OrbitCamera,
    pub light: HemisphericLight,
    pub sky: SkyBox,
    pub character: CharacterModel,
    pub platform_color: Color,
    pub platform_size: DVec3,
}

impl SceneBlueprint {
    pub fn standard(config: &GameConfig) -> Self {
        Self {
            camera: OrbitCamera::default(),
            light: HemisphericLight {
                direction: DVec3::ZERO,
                intensity: 0.9,
            },
            sky: SkyBox {
                size: 1000.0,
                emissive: WHITE,
                back_face_culling: false,
            },
            character: CharacterModel::standard(),
            platform_color: RED,
            platform_size: DVec3::new(config.table_size, config.table_height, config.table_size),
        }
    }
}
