//! Billboard Orientation
//!
//! Chooses the "right" axis of the agent's camera-facing sprite quad.
//!
//! The target axis blends the camera-facing right (70%) with the movement
//! right (30%), is sign-stabilized against the previous frame's axis so the
//! sprite never mirrors, and is then smoothed toward that target.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::frame::{
    BlendLaw, WORLD_RIGHT, local_up, project_on_plane, tangent_direction, try_unit,
};

/// Weight of the camera-facing right in the blended target
pub const CAMERA_WEIGHT: f32 = 0.7;

/// Weight of the movement right in the blended target
pub const MOVEMENT_WEIGHT: f32 = 0.3;

/// Per-call smoothing factor the billboard was tuned with at 60 Hz
pub const SMOOTHING_PER_TICK: f32 = 0.16;

/// Settings for deriving the billboard's right axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillboardOrienter {
    /// Weight of the camera-facing right
    pub camera_weight: f32,
    /// Weight of the movement right
    pub movement_weight: f32,
    /// Blend toward the target each call
    pub smoothing: BlendLaw,
}

impl Default for BillboardOrienter {
    fn default() -> Self {
        Self {
            camera_weight: CAMERA_WEIGHT,
            movement_weight: MOVEMENT_WEIGHT,
            smoothing: BlendLaw::exponential_matching(SMOOTHING_PER_TICK),
        }
    }
}

impl BillboardOrienter {
    /// Blended, unsmoothed right axis for the current frame.
    ///
    /// Tangent to the sphere at `agent_position`; never zero.
    pub fn target_right(
        &self,
        agent_position: Vec3,
        agent_forward_hint: Vec3,
        camera_position: Vec3,
        center: Vec3,
    ) -> Vec3 {
        let up = local_up(agent_position, center);

        let to_camera = try_unit(project_on_plane(camera_position - agent_position, up))
            .unwrap_or_else(|| tangent_direction(agent_forward_hint, up));
        let movement_forward =
            try_unit(project_on_plane(agent_forward_hint, up)).unwrap_or(to_camera);

        let camera_right =
            try_unit(up.cross(to_camera)).unwrap_or_else(|| tangent_direction(WORLD_RIGHT, up));
        let movement_right = try_unit(movement_forward.cross(up)).unwrap_or(camera_right);

        try_unit(camera_right * self.camera_weight + movement_right * self.movement_weight)
            .unwrap_or(camera_right)
    }

    /// Compute the stabilized right axis for this frame.
    ///
    /// # Arguments
    ///
    /// * `agent_position` - Agent center in world space
    /// * `agent_forward_hint` - Agent's smoothed forward direction
    /// * `camera_position` - Camera eye position this frame
    /// * `center` - Sphere center
    /// * `previous_stabilized_right` - Result of the previous call (zero on the first call)
    /// * `dt` - Frame time, used by [`BlendLaw::Exponential`]
    ///
    /// # Returns
    ///
    /// Unit vector with a non-negative dot product against
    /// `previous_stabilized_right`.
    pub fn compute(
        &self,
        agent_position: Vec3,
        agent_forward_hint: Vec3,
        camera_position: Vec3,
        center: Vec3,
        previous_stabilized_right: Vec3,
        dt: f32,
    ) -> Vec3 {
        let mut target =
            self.target_right(agent_position, agent_forward_hint, camera_position, center);

        if previous_stabilized_right.dot(target) < 0.0 {
            target = -target;
        }

        let blend = self.smoothing.factor(dt);
        try_unit(previous_stabilized_right.lerp(target, blend)).unwrap_or(target)
    }
}

/// Persistent billboard right axis, owned by the agent's render state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillboardOrientation {
    /// Smoothed, sign-stable right axis (unit length)
    pub stabilized_right: Vec3,
}

impl BillboardOrientation {
    /// Seed the orientation with an initial right axis.
    pub fn new(initial_right: Vec3) -> Self {
        Self {
            stabilized_right: try_unit(initial_right).unwrap_or(WORLD_RIGHT),
        }
    }

    /// Advance one frame and return the new right axis.
    pub fn advance(
        &mut self,
        orienter: &BillboardOrienter,
        agent_position: Vec3,
        agent_forward_hint: Vec3,
        camera_position: Vec3,
        center: Vec3,
        dt: f32,
    ) -> Vec3 {
        self.stabilized_right = orienter.compute(
            agent_position,
            agent_forward_hint,
            camera_position,
            center,
            self.stabilized_right,
            dt,
        );
        self.stabilized_right
    }
}
