//! Collision Detection
//!
//! Sphere-sphere non-penetration between the agent and the planetoid.
//!
//! The resolution is a velocity projection, not a bounce: when the agent's
//! center ends up inside the surface radius it is moved back onto it along
//! the radial direction and only the inward part of its velocity is removed.
//! Tangential velocity passes through untouched.

use glam::Vec3;

use super::frame::local_up;

/// Result of resolving the agent against the sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactResolution {
    /// Corrected position (on or outside the surface radius)
    pub position: Vec3,
    /// Corrected velocity (no inward radial component when clamped)
    pub velocity: Vec3,
    /// Whether the position had to be clamped this call
    pub clamped: bool,
}

impl ContactResolution {
    /// No contact: position and velocity pass through unchanged
    pub fn none(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            clamped: false,
        }
    }
}

/// Resolves the agent at `position` against a sphere at `center`.
///
/// # Arguments
///
/// * `position` - Agent center after integration
/// * `velocity` - Agent velocity after integration
/// * `center` - Sphere center
/// * `surface_radius` - Sphere radius plus agent radius
pub fn resolve_sphere_contact(
    position: Vec3,
    velocity: Vec3,
    center: Vec3,
    surface_radius: f32,
) -> ContactResolution {
    let distance = (position - center).length();
    if distance >= surface_radius {
        return ContactResolution::none(position, velocity);
    }

    let up = local_up(position, center);
    let radial_speed = velocity.dot(up);
    let velocity = if radial_speed < 0.0 {
        velocity - up * radial_speed
    } else {
        velocity
    };

    ContactResolution {
        position: center + up * surface_radius,
        velocity,
        clamped: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_surface_is_untouched() {
        let pos = Vec3::new(0.0, 12.0, 0.0);
        let vel = Vec3::new(1.0, -2.0, 0.5);
        let res = resolve_sphere_contact(pos, vel, Vec3::ZERO, 10.0);
        assert!(!res.clamped);
        assert_eq!(res.position, pos);
        assert_eq!(res.velocity, vel);
    }

    #[test]
    fn test_penetration_clamps_to_surface() {
        let res = resolve_sphere_contact(
            Vec3::new(0.0, 9.5, 0.0),
            Vec3::new(3.0, -4.0, 1.0),
            Vec3::ZERO,
            10.0,
        );
        assert!(res.clamped);
        assert!((res.position - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-5);
        // Radial component removed, tangential preserved exactly
        assert_eq!(res.velocity, Vec3::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn test_outward_velocity_is_preserved() {
        let vel = Vec3::new(0.0, 5.0, 2.0);
        let res = resolve_sphere_contact(Vec3::new(0.0, 9.0, 0.0), vel, Vec3::ZERO, 10.0);
        assert!(res.clamped);
        assert_eq!(res.velocity, vel);
    }

    #[test]
    fn test_oblique_penetration_keeps_tangential_velocity() {
        let center = Vec3::new(1.0, 1.0, 1.0);
        let dir = Vec3::new(1.0, 1.0, 0.0).normalize();
        let pos = center + dir * 4.0;
        let tangent = Vec3::new(-1.0, 1.0, 0.0).normalize() * 3.0 + Vec3::Z * 2.0;
        let vel = tangent - dir * 6.0;

        let res = resolve_sphere_contact(pos, vel, center, 5.0);
        assert!(res.clamped);
        assert!(((res.position - center).length() - 5.0).abs() < 1e-5);
        assert!(res.velocity.dot(dir).abs() < 1e-5);
        assert!((res.velocity - tangent).length() < 1e-5);
    }

    #[test]
    fn test_position_at_center_is_pushed_along_default_up() {
        let res = resolve_sphere_contact(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, 3.0);
        assert!(res.clamped);
        assert_eq!(res.position, Vec3::new(0.0, 3.0, 0.0));
    }
}
