//! Config Module
//!
//! Centralized configuration for the world, locomotion, camera and render
//! parameters.
//!
//! Every section deserializes with defaults, so a JSON file only needs the
//! keys it overrides:
//!
//! ```json
//! {
//!     "world": { "sphere": { "radius": 35.0 } },
//!     "locomotion": { "gravity": 30.0, "steer_blend": { "law": "fixed_per_call", "factor": 0.1 } }
//! }
//! ```

pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

use crate::camera::OrbitalCamera;
use crate::physics::BlendLaw;
use crate::player::LocomotionConfig;
use crate::render::{BillboardOrienter, ShadowConfig, SpriteConfig};
use crate::world::SphereWorld;

/// Top-level configuration for one simulated agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetoidConfig {
    pub world: SphereWorld,
    pub locomotion: LocomotionConfig,
    pub camera: OrbitalCamera,
    pub billboard: BillboardOrienter,
    pub shadow: ShadowConfig,
    pub sprite: SpriteConfig,
}

impl PlanetoidConfig {
    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate JSON config text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        ensure_finite_vec("world.sphere.center", world.sphere.center.to_array())?;
        ensure_positive("world.sphere.radius", world.sphere.radius)?;
        ensure_positive("world.agent_radius", world.agent_radius)?;

        let loco = &self.locomotion;
        ensure_non_negative("locomotion.move_acceleration", loco.move_acceleration)?;
        ensure_non_negative("locomotion.gravity", loco.gravity)?;
        ensure_non_negative("locomotion.jump_impulse", loco.jump_impulse)?;
        ensure_non_negative("locomotion.grounded_tolerance", loco.grounded_tolerance)?;
        if !(loco.ground_drag > 0.0 && loco.ground_drag <= 1.0) {
            return Err(ConfigError::invalid(
                "locomotion.ground_drag",
                format!("{} is not in (0, 1]", loco.ground_drag),
            ));
        }
        ensure_blend_law("locomotion.steer_blend", loco.steer_blend)?;

        let camera = &self.camera;
        ensure_non_negative("camera.horizontal_distance", camera.horizontal_distance)?;
        ensure_non_negative("camera.look_ahead_distance", camera.look_ahead_distance)?;
        if !(camera.floor_angle_degrees > 0.0 && camera.floor_angle_degrees < 90.0) {
            return Err(ConfigError::invalid(
                "camera.floor_angle_degrees",
                format!("{} is not in (0, 90)", camera.floor_angle_degrees),
            ));
        }
        if !(camera.fov_y_degrees > 0.0 && camera.fov_y_degrees < 180.0) {
            return Err(ConfigError::invalid(
                "camera.fov_y_degrees",
                format!("{} is not in (0, 180)", camera.fov_y_degrees),
            ));
        }
        ensure_positive("camera.near", camera.near)?;
        if !(camera.far > camera.near) {
            return Err(ConfigError::invalid(
                "camera.far",
                format!("{} must be greater than near ({})", camera.far, camera.near),
            ));
        }

        let billboard = &self.billboard;
        ensure_non_negative("billboard.camera_weight", billboard.camera_weight)?;
        ensure_non_negative("billboard.movement_weight", billboard.movement_weight)?;
        if billboard.camera_weight + billboard.movement_weight <= 0.0 {
            return Err(ConfigError::invalid(
                "billboard.camera_weight",
                "camera and movement weights cannot both be zero",
            ));
        }
        ensure_blend_law("billboard.smoothing", billboard.smoothing)?;

        let shadow = &self.shadow;
        ensure_non_negative("shadow.fade_height", shadow.fade_height)?;
        ensure_unit_interval("shadow.min_opacity", shadow.min_opacity)?;
        ensure_unit_interval("shadow.max_opacity", shadow.max_opacity)?;
        ensure_non_negative("shadow.min_scale", shadow.min_scale)?;
        ensure_non_negative("shadow.max_scale", shadow.max_scale)?;
        ensure_non_negative("shadow.surface_offset", shadow.surface_offset)?;
        ensure_positive("shadow.width", shadow.width)?;
        ensure_positive("shadow.depth", shadow.depth)?;

        ensure_positive("sprite.width", self.sprite.width)?;
        ensure_positive("sprite.height", self.sprite.height)?;

        Ok(())
    }
}

fn ensure_finite_vec(field: &'static str, values: [f32; 3]) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{values:?} is not finite")))
    }
}

fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be positive")))
    }
}

fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be non-negative")))
    }
}

fn ensure_unit_interval(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is not in [0, 1]")))
    }
}

fn ensure_blend_law(field: &'static str, law: BlendLaw) -> Result<(), ConfigError> {
    match law {
        BlendLaw::Exponential { rate } => ensure_non_negative(field, rate),
        BlendLaw::FixedPerCall { factor } => ensure_unit_interval(field, factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::GRAVITY;
    use crate::world::DEFAULT_SPHERE_RADIUS;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlanetoidConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = PlanetoidConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PlanetoidConfig::default());
    }

    #[test]
    fn test_partial_json_overrides_only_named_keys() {
        let config = PlanetoidConfig::from_json_str(
            r#"{ "world": { "sphere": { "radius": 35.0 } }, "locomotion": { "jump_impulse": 9.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.world.sphere.radius, 35.0);
        assert_eq!(config.locomotion.jump_impulse, 9.0);
        assert_eq!(config.locomotion.gravity, GRAVITY);
        assert_eq!(config.camera, OrbitalCamera::default());
    }

    #[test]
    fn test_blend_law_is_tagged() {
        let config = PlanetoidConfig::from_json_str(
            r#"{ "billboard": { "smoothing": { "law": "fixed_per_call", "factor": 0.16 } } }"#,
        )
        .unwrap();
        assert_eq!(
            config.billboard.smoothing,
            BlendLaw::FixedPerCall { factor: 0.16 }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = PlanetoidConfig::default();
        config.world.sphere.radius = 12.5;
        let text = config.to_json_string().unwrap();
        assert_eq!(PlanetoidConfig::from_json_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_drag() {
        for drag in [0.0, 1.5, -0.2] {
            let mut config = PlanetoidConfig::default();
            config.locomotion.ground_drag = drag;
            match config.validate() {
                Err(ConfigError::Invalid { field, .. }) => {
                    assert_eq!(field, "locomotion.ground_drag")
                }
                other => panic!("expected invalid drag, got {:?}", other),
            }
        }

        let mut config = PlanetoidConfig::default();
        config.locomotion.ground_drag = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let err = PlanetoidConfig::from_json_str(r#"{ "world": { "sphere": { "radius": 0.0 } } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "world.sphere.radius", .. }
        ));
        assert_eq!(DEFAULT_SPHERE_RADIUS, PlanetoidConfig::default().world.sphere.radius);
    }

    #[test]
    fn test_rejects_floor_angle_out_of_range() {
        for angle in [0.0, 90.0, 120.0] {
            let mut config = PlanetoidConfig::default();
            config.camera.floor_angle_degrees = angle;
            assert!(config.validate().is_err(), "angle {angle} accepted");
        }
    }

    #[test]
    fn test_rejects_negative_rate() {
        let mut config = PlanetoidConfig::default();
        config.locomotion.steer_blend = BlendLaw::Exponential { rate: -1.0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = PlanetoidConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PlanetoidConfig::load("/definitely/not/here/planetoid.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("planetoid.json"));
    }
}
