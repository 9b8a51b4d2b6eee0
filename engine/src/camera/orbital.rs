//! Orbital Camera Module
//!
//! Third-person camera that trails the agent around the sphere. The camera
//! has no state of its own: every frame it is derived from the agent's
//! position and forward hint.
//!
//! ## Local Up
//!
//! The look-at transform uses the agent's local surface normal as its up
//! reference instead of a fixed world axis. A fixed world-up camera flips
//! when the agent walks over a pole; the local-up camera does not.
//!
//! ```text
//!            camera
//!              *.
//!              |  ` .           height = horizontal_distance * tan(floor_angle)
//!       height |      ` .
//!              |          ` .
//!              +-------------@-----> target (agent + look_ahead * forward)
//!          horizontal_distance  agent
//! ```

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::physics::frame::{local_up, tangent_direction};

/// Distance the camera stays behind the agent along the tangent plane (m)
pub const HORIZONTAL_DISTANCE: f32 = 9.0;

/// Angle of the camera above the agent's tangent plane (degrees)
pub const FLOOR_ANGLE_DEGREES: f32 = 28.0;

/// How far ahead of the agent the camera looks (m)
pub const LOOK_AHEAD_DISTANCE: f32 = 1.5;

/// Camera view and placement settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalCamera {
    /// Distance behind the agent, measured along the tangent plane
    pub horizontal_distance: f32,
    /// Elevation angle above the tangent plane in degrees
    pub floor_angle_degrees: f32,
    /// Forward offset of the look target from the agent
    pub look_ahead_distance: f32,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Default for OrbitalCamera {
    fn default() -> Self {
        Self {
            horizontal_distance: HORIZONTAL_DISTANCE,
            floor_angle_degrees: FLOOR_ANGLE_DEGREES,
            look_ahead_distance: LOOK_AHEAD_DISTANCE,
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 500.0,
        }
    }
}

/// Camera placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Eye position in world space
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up reference for the view basis (the agent's local up)
    pub up: Vec3,
}

impl CameraFrame {
    /// Right-handed view matrix looking from `position` at `target`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Unit direction from the eye toward the target.
    pub fn look_direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

impl OrbitalCamera {
    /// Derive the camera for an agent at `agent_position` facing `agent_forward_hint`.
    pub fn derive(&self, agent_position: Vec3, agent_forward_hint: Vec3, center: Vec3) -> CameraFrame {
        derive_camera(
            agent_position,
            agent_forward_hint,
            center,
            self.horizontal_distance,
            self.floor_angle_degrees,
            self.look_ahead_distance,
        )
    }

    /// Perspective projection for the given viewport aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect, self.near, self.far)
    }

    /// Combined view-projection matrix for `frame`.
    pub fn view_projection(&self, frame: &CameraFrame, aspect: f32) -> Mat4 {
        self.projection(aspect) * frame.view_matrix()
    }
}

/// Derive camera position, target and up from the agent's state.
///
/// # Arguments
///
/// * `agent_position` - Agent center in world space
/// * `agent_forward_hint` - Agent's smoothed forward direction
/// * `center` - Sphere center
/// * `horizontal_distance` - Distance behind the agent along the tangent plane
/// * `floor_angle_degrees` - Elevation above the tangent plane
/// * `look_ahead_distance` - Forward offset of the look target
pub fn derive_camera(
    agent_position: Vec3,
    agent_forward_hint: Vec3,
    center: Vec3,
    horizontal_distance: f32,
    floor_angle_degrees: f32,
    look_ahead_distance: f32,
) -> CameraFrame {
    let up = local_up(agent_position, center);
    let look_direction = tangent_direction(agent_forward_hint, up);

    let target = agent_position + look_direction * look_ahead_distance;
    let height = horizontal_distance * floor_angle_degrees.to_radians().tan();
    let position = agent_position + up * height - look_direction * horizontal_distance;

    CameraFrame {
        position,
        target,
        up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_camera_behind_and_above_at_pole() {
        let camera = OrbitalCamera::default();
        let agent = Vec3::new(0.0, 20.5, 0.0);
        let frame = camera.derive(agent, Vec3::NEG_Z, Vec3::ZERO);

        let height = HORIZONTAL_DISTANCE * FLOOR_ANGLE_DEGREES.to_radians().tan();
        let expected = agent + Vec3::Y * height + Vec3::Z * HORIZONTAL_DISTANCE;
        assert!((frame.position - expected).length() < EPS);
        assert!((frame.target - (agent + Vec3::NEG_Z * LOOK_AHEAD_DISTANCE)).length() < EPS);
        assert_eq!(frame.up, Vec3::Y);
    }

    #[test]
    fn test_camera_up_follows_surface_normal() {
        let camera = OrbitalCamera::default();
        let agent = Vec3::new(20.5, 0.0, 0.0);
        let frame = camera.derive(agent, Vec3::Y, Vec3::ZERO);

        assert!((frame.up - Vec3::X).length() < EPS);
        // Camera sits above the agent relative to the local surface.
        assert!((frame.position - agent).dot(frame.up) > 0.0);
        // And behind it relative to the look direction.
        assert!((frame.position - agent).dot(Vec3::Y) < 0.0);
    }

    #[test]
    fn test_degenerate_hint_uses_world_forward() {
        let agent = Vec3::new(0.0, 10.0, 0.0);
        let frame = derive_camera(agent, Vec3::Y, Vec3::ZERO, 5.0, 45.0, 1.0);
        assert!((frame.target - (agent + Vec3::NEG_Z)).length() < EPS);
        assert!((frame.position - (agent + Vec3::Y * 5.0 + Vec3::Z * 5.0)).length() < EPS);
    }

    #[test]
    fn test_view_matrix_is_finite_near_poles() {
        let camera = OrbitalCamera::default();
        for agent in [
            Vec3::new(0.0, 20.5, 0.0),
            Vec3::new(0.0, -20.5, 0.0),
            Vec3::new(1e-3, 20.5, 1e-3),
            Vec3::new(0.0, 0.0, -20.5),
        ] {
            let frame = camera.derive(agent, Vec3::NEG_Z, Vec3::ZERO);
            let view = frame.view_matrix();
            assert!(view.is_finite(), "view not finite at {:?}", agent);
            // The eye maps to the view-space origin.
            let eye = view.transform_point3(frame.position);
            assert!(eye.length() < 1e-3);
        }
    }

    #[test]
    fn test_target_is_in_front_in_view_space() {
        let camera = OrbitalCamera::default();
        let frame = camera.derive(Vec3::new(3.0, 12.0, -16.0), Vec3::X, Vec3::ZERO);
        let target = frame.view_matrix().transform_point3(frame.target);
        // Right-handed view space looks down -Z.
        assert!(target.z < 0.0);
        assert!(target.x.abs() < 1e-3);
    }

    #[test]
    fn test_view_projection_combines_matrices() {
        let camera = OrbitalCamera::default();
        let frame = camera.derive(Vec3::new(0.0, 20.5, 0.0), Vec3::NEG_Z, Vec3::ZERO);
        let vp = camera.view_projection(&frame, 16.0 / 9.0);
        let expected = camera.projection(16.0 / 9.0) * frame.view_matrix();
        assert!(vp.abs_diff_eq(expected, 1e-6));
    }
}
