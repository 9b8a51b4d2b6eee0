//! Contact Shadow
//!
//! The agent's ground shadow fades and shrinks linearly with height above
//! the surface, clamped between a floor and a ceiling.

use serde::{Deserialize, Serialize};

/// Shadow fade settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Height above the surface at which the shadow reaches its minimum
    pub fade_height: f32,
    /// Opacity at or above `fade_height`
    pub min_opacity: f32,
    /// Opacity when standing on the surface
    pub max_opacity: f32,
    /// Scale at or above `fade_height`
    pub min_scale: f32,
    /// Scale when standing on the surface
    pub max_scale: f32,
    /// Lift above the sphere surface to avoid z-fighting
    pub surface_offset: f32,
    /// Shadow quad width at full scale
    pub width: f32,
    /// Shadow quad depth at full scale
    pub depth: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            fade_height: 4.0,
            min_opacity: 0.15,
            max_opacity: 0.55,
            min_scale: 0.45,
            max_scale: 1.0,
            surface_offset: 0.02,
            width: 1.1,
            depth: 0.55,
        }
    }
}

/// Per-frame shadow strength consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowParams {
    /// Opacity in [min_opacity, max_opacity]
    pub opacity: f32,
    /// Size multiplier in [min_scale, max_scale]
    pub scale: f32,
}

impl ShadowConfig {
    /// Shadow strength for an agent `height` meters above its resting distance.
    pub fn shadow_params(&self, height: f32) -> ShadowParams {
        let t = if self.fade_height > 0.0 {
            (height / self.fade_height).clamp(0.0, 1.0)
        } else if height > 0.0 {
            1.0
        } else {
            0.0
        };

        ShadowParams {
            opacity: self.max_opacity + (self.min_opacity - self.max_opacity) * t,
            scale: self.max_scale + (self.min_scale - self.max_scale) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grounded_shadow_is_strongest() {
        let config = ShadowConfig::default();
        let params = config.shadow_params(0.0);
        assert_eq!(params.opacity, config.max_opacity);
        assert_eq!(params.scale, config.max_scale);
    }

    #[test]
    fn test_shadow_fades_linearly() {
        let config = ShadowConfig::default();
        let half = config.shadow_params(config.fade_height * 0.5);
        let mid_opacity = (config.min_opacity + config.max_opacity) * 0.5;
        let mid_scale = (config.min_scale + config.max_scale) * 0.5;
        assert!((half.opacity - mid_opacity).abs() < 1e-6);
        assert!((half.scale - mid_scale).abs() < 1e-6);
    }

    #[test]
    fn test_shadow_is_clamped() {
        let config = ShadowConfig::default();
        let high = config.shadow_params(100.0);
        assert!((high.opacity - config.min_opacity).abs() < 1e-6);
        assert!((high.scale - config.min_scale).abs() < 1e-6);

        // Slightly below the surface (float noise) counts as grounded.
        let low = config.shadow_params(-0.01);
        assert_eq!(low.opacity, config.max_opacity);
    }

    #[test]
    fn test_zero_fade_height_is_a_step() {
        let config = ShadowConfig {
            fade_height: 0.0,
            ..Default::default()
        };
        assert_eq!(config.shadow_params(0.0).opacity, config.max_opacity);
        assert!((config.shadow_params(0.1).opacity - config.min_opacity).abs() < 1e-6);
    }
}
