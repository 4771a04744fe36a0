//! WASM entry point - JS owns the render loop and the 3D engine
//!
//! The page forwards pointer events and frame ticks to [`JumpGame`] and copies
//! the returned pose onto its meshes.

use crate::character::Character;
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::render::{SceneBlueprint, TableManager};
use glam::DVec3;
use wasm_bindgen::prelude::*;

/// `performance.now()`, in milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}

#[wasm_bindgen]
pub struct JumpGame {
    character: Character<PerformanceClock>,
    scene: SceneBlueprint,
    tables: TableManager,
}

#[wasm_bindgen]
impl JumpGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JumpGame {
        let config = GameConfig::STANDARD;
        let mut character = Character::new(config, PerformanceClock);
        character.reset();

        let mut tables = TableManager::new(&config);
        let spawn = config.role_init_position;
        let table_y = config.ground_y - config.table_height / 2.0;
        tables.create_cube("table-0", spawn.x, table_y, spawn.z);

        JumpGame {
            character,
            scene: SceneBlueprint::standard(&config),
            tables,
        }
    }

    /// Pointer down.
    pub fn press(&mut self) {
        self.character.press();
    }

    /// Pointer up.
    pub fn release(&mut self, x: f64, y: f64, z: f64) {
        self.character.release(DVec3::new(x, y, z));
    }

    /// Once per frame with the milliseconds since the previous frame.
    pub fn update(&mut self, delta_ms: f64) {
        self.character.update(delta_ms);
    }

    pub fn reset(&mut self) {
        self.character.reset();
    }

    pub fn status(&self) -> String {
        self.character.status().to_string()
    }

    /// `[px, py, pz, qx, qy, qz, qw, 1, 1, 1, body_x, body_y, body_z, head_y]`
    pub fn pose(&self) -> Vec<f64> {
        let pose = self.character.pose();
        let mut out = pose.root.to_array().to_vec();
        out.extend_from_slice(&pose.body_scale.to_array());
        out.push(pose.head_offset_y);
        out
    }

    /// `[alpha, beta, radius, target_x, target_y, target_z]`
    pub fn camera(&self) -> Vec<f64> {
        let camera = &self.scene.camera;
        let t = camera.target;
        vec![camera.alpha, camera.beta, camera.radius, t.x, t.y, t.z]
    }

    /// Pointer drag in pixels; orbits the camera around its target.
    pub fn orbit(&mut self, delta_x: f64, delta_y: f64) {
        self.scene.camera.rotate(delta_x, delta_y);
    }

    /// Wheel steps; positive zooms in.
    pub fn zoom(&mut self, delta: f64) {
        self.scene.camera.zoom(delta);
    }

    /// Six numbers per platform cube: center x, y, z then width, height, depth.
    pub fn platforms(&self) -> Vec<f64> {
        self.tables.cubes().iter().flat_map(|c| c.to_array()).collect()
    }

    /// Drops every platform and returns them in the `platforms()` layout so
    /// the page can remove the matching meshes.
    #[wasm_bindgen(js_name = clearPlatforms)]
    pub fn clear_platforms(&mut self) -> Vec<f64> {
        self.tables.clear_all().iter().flat_map(|c| c.to_array()).collect()
    }

    /// Seven numbers per model part, head first: kind (0 sphere, 1 cylinder),
    /// three dimensions, then the x, y, z offset.
    #[wasm_bindgen(js_name = characterParts)]
    pub fn character_parts(&self) -> Vec<f64> {
        self.scene.character.to_flat()
    }

    #[wasm_bindgen(js_name = lightIntensity)]
    pub fn light_intensity(&self) -> f64 {
        self.scene.light.intensity
    }

    #[wasm_bindgen(js_name = skyboxSize)]
    pub fn skybox_size(&self) -> f64 {
        self.scene.sky.size
    }
}

impl Default for JumpGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).expect("Failed to init logger");
}
