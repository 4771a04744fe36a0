//! Fixed game constants.
//!
//! The values mirror the playfield the scene is built around: the platform is
//! a 16 x 10 x 16 block, the character stands on its top face. Hosts and tests
//! receive them through these structs rather than globals.

use glam::DVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Height of the landing plane.
    pub ground_y: f64,
    /// Downward acceleration in units/ms².
    pub gravity: f64,
    pub role_init_position: DVec3,
    pub table_height: f64,
    pub table_size: f64,
}

impl GameConfig {
    pub const TABLE_HEIGHT: f64 = 20.0 / 2.0;
    pub const TABLE_SIZE: f64 = 32.0 / 2.0;

    pub const STANDARD: Self = Self {
        ground_y: Self::TABLE_HEIGHT,
        gravity: 0.0001,
        role_init_position: DVec3::new(-8.0, Self::TABLE_HEIGHT, 25.0),
        table_height: Self::TABLE_HEIGHT,
        table_size: Self::TABLE_SIZE,
    };

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_spawn(mut self, position: DVec3) -> Self {
        self.role_init_position = position;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Rates and limits for the charge squash, launch speed and rebound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeTuning {
    /// Horizontal body scale growth per ms while pressed.
    pub widen_rate: f64,
    pub max_width: f64,
    /// Vertical body scale loss per ms while pressed.
    pub flatten_rate: f64,
    pub min_height: f64,
    /// Head drop per ms while pressed.
    pub head_sink_rate: f64,
    pub min_head_offset: f64,
    pub rest_head_offset: f64,
    /// Press duration at which both launch speeds saturate.
    pub full_charge_ms: f64,
    pub max_velocity_horizontal: f64,
    pub max_velocity_vertical: f64,
    pub rebound_ms: f64,
    /// Spin applied over one flight, in degrees.
    pub spin_degrees: f64,
}

impl ChargeTuning {
    pub const STANDARD: Self = Self {
        widen_rate: 0.0003,
        max_width: 1.8,
        flatten_rate: 0.0001,
        min_height: 0.8,
        head_sink_rate: 0.000175,
        min_head_offset: 1.25,
        rest_head_offset: 1.6,
        full_charge_ms: 2000.0,
        max_velocity_horizontal: 0.02,
        max_velocity_vertical: 0.04,
        rebound_ms: 200.0,
        spin_degrees: -360.0,
    };
}

impl Default for ChargeTuning {
    fn default() -> Self {
        Self::STANDARD
    }
}
