use glam::DVec3;

use super::scene::{Color, RED};
use crate::config::GameConfig;

/// A platform block the character can stand on.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformCube {
    pub name: String,
    pub position: DVec3,
    /// Width, height, depth.
    pub size: DVec3,
    pub color: Color,
}

impl PlatformCube {
    /// Center x, y, z then width, height, depth.
    pub fn to_array(&self) -> [f64; 6] {
        let (p, s) = (self.position, self.size);
        [p.x, p.y, p.z, s.x, s.y, s.z]
    }
}

/// Bookkeeping for the platform blocks a host has placed in its scene.
#[derive(Debug, Clone)]
pub struct TableManager {
    size: DVec3,
    cubes: Vec<PlatformCube>,
}

impl TableManager {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            size: DVec3::new(config.table_size, config.table_height, config.table_size),
            cubes: Vec::new(),
        }
    }

    pub fn create_cube(
        &mut self,
        name: impl Into<String>,
        x: f64,
        y: f64,
        z: f64,
    ) -> &PlatformCube {
        let index = self.cubes.len();
        self.cubes.push(PlatformCube {
            name: name.into(),
            position: DVec3::new(x, y, z),
            size: self.size,
            color: RED,
        });
        log::debug!("platform cube #{} at ({}, {}, {})", index, x, y, z);
        &self.cubes[index]
    }

    /// Forgets every cube and hands them back so the host can remove the
    /// engine meshes.
    pub fn clear_all(&mut self) -> Vec<PlatformCube> {
        std::mem::take(&mut self.cubes)
    }

    pub fn cubes(&self) -> &[PlatformCube] {
        &self.cubes
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }
}
