//! Simulation tuning, decoupled from the demo binaries.
//!
//! Defaults are the canonical constant set: radius 1.25, cube half-extent
//! 15.0, h = 0.01, gravity (0, -9.8, 0), restitution 1.0, friction 0.1.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::sim::{SimParams, BALL_RADIUS, TIMESTEP};

fn default_gravity() -> [f32; 3] {
    [0.0, -9.8, 0.0]
}
fn default_timestep() -> f32 {
    TIMESTEP
}
fn default_restitution() -> f32 {
    1.0
}
fn default_friction() -> f32 {
    0.1
}
fn default_half_extent() -> f32 {
    15.0
}
fn default_ball_radius() -> f32 {
    BALL_RADIUS
}
fn default_initial_velocity() -> [f32; 3] {
    [30.0, 10.8, 80.0]
}
fn default_air_resistance() -> f32 {
    0.0
}
fn default_wind() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

/// Serializable tuning values stored in a JSON config file. Missing fields
/// fall back to the canonical constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimTuning {
    #[serde(default = "default_gravity")]
    pub gravity: [f32; 3],
    #[serde(default = "default_timestep")]
    pub timestep: f32,
    #[serde(default = "default_restitution")]
    pub restitution: f32,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default = "default_half_extent")]
    pub half_extent: f32,
    #[serde(default = "default_ball_radius")]
    pub ball_radius: f32,
    #[serde(default = "default_initial_velocity")]
    pub initial_velocity: [f32; 3],
    #[serde(default = "default_air_resistance")]
    pub air_resistance: f32,
    #[serde(default = "default_wind")]
    pub wind: [f32; 3],
}

impl Default for SimTuning {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            timestep: default_timestep(),
            restitution: default_restitution(),
            friction: default_friction(),
            half_extent: default_half_extent(),
            ball_radius: default_ball_radius(),
            initial_velocity: default_initial_velocity(),
            air_resistance: default_air_resistance(),
            wind: default_wind(),
        }
    }
}

impl SimTuning {
    pub fn params(&self) -> SimParams {
        SimParams {
            gravity: Vec3::from(self.gravity),
            timestep: self.timestep,
            restitution: self.restitution,
            friction: self.friction,
            air_resistance: self.air_resistance,
            wind: Vec3::from(self.wind),
        }
    }

    pub fn initial_velocity(&self) -> Vec3 {
        Vec3::from(self.initial_velocity)
    }
}

pub fn load_tuning_from_file(path: &str) -> Result<SimTuning, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

/// Load tuning from `path`, or report the problem to stderr and fall back to
/// the defaults.
pub fn load_tuning_or_default(path: Option<&str>) -> SimTuning {
    match path {
        Some(path) => match load_tuning_from_file(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                eprintln!("{err}; using default tuning");
                SimTuning::default()
            }
        },
        None => SimTuning::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_canonical_constants() {
        let tuning = SimTuning::default();
        assert_eq!(tuning.ball_radius, 1.25);
        assert_eq!(tuning.half_extent, 15.0);
        assert_eq!(tuning.timestep, 0.01);
        assert_eq!(tuning.restitution, 1.0);
        assert_eq!(tuning.friction, 0.1);
        assert_eq!(tuning.gravity, [0.0, -9.8, 0.0]);
        assert_eq!(tuning.initial_velocity, [30.0, 10.8, 80.0]);
        assert_eq!(tuning.air_resistance, 0.0);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let tuning: SimTuning = serde_json::from_str(r#"{ "restitution": 0.8 }"#).unwrap();
        assert_eq!(tuning.restitution, 0.8);
        assert_eq!(tuning.ball_radius, 1.25);
        assert_eq!(tuning.half_extent, 15.0);
    }

    #[test]
    fn params_mirror_the_tuning() {
        let tuning = SimTuning::default();
        let params = tuning.params();
        assert_eq!(params.gravity, Vec3::new(0.0, -9.8, 0.0));
        assert_eq!(params.timestep, 0.01);
        assert_eq!(params.restitution, 1.0);
        assert_eq!(params.friction, 0.1);
    }
}
