//! Sphere World
//!
//! The planetoid the agent walks on. The sphere is the only collider; the
//! agent is a sphere of `agent_radius` resting on it.
//!
//! ## Surface Radius
//! The agent's center may never come closer to the sphere center than
//! `radius + agent_radius`. Everything that measures "height" in the crate
//! measures it against that surface radius.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::frame::local_up;

/// Default planetoid radius in meters
pub const DEFAULT_SPHERE_RADIUS: f32 = 20.0;

/// Default agent collider radius in meters
pub const DEFAULT_AGENT_RADIUS: f32 = 0.5;

/// Immutable sphere geometry (center and radius).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sphere {
    /// World-space center of the sphere
    pub center: Vec3,
    /// Radius of the sphere surface in meters
    pub radius: f32,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: DEFAULT_SPHERE_RADIUS,
        }
    }
}

impl Sphere {
    /// Create a sphere at `center` with the given radius.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Surface normal direction at `position` (away from the center).
    ///
    /// Returns `Vec3::Y` when `position` coincides with the center.
    pub fn up_at(&self, position: Vec3) -> Vec3 {
        local_up(position, self.center)
    }

    /// Distance from the sphere center to `position`.
    pub fn distance_from_center(&self, position: Vec3) -> f32 {
        (position - self.center).length()
    }

    /// Signed height of `position` above the sphere surface.
    pub fn height_above_surface(&self, position: Vec3) -> f32 {
        self.distance_from_center(position) - self.radius
    }

    /// Point on the surface radially below (or above) `position`.
    pub fn surface_point(&self, position: Vec3) -> Vec3 {
        self.center + self.up_at(position) * self.radius
    }
}

/// The sphere together with the agent's collider radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereWorld {
    /// Supporting sphere
    pub sphere: Sphere,
    /// Agent bounding radius in meters
    pub agent_radius: f32,
}

impl Default for SphereWorld {
    fn default() -> Self {
        Self {
            sphere: Sphere::default(),
            agent_radius: DEFAULT_AGENT_RADIUS,
        }
    }
}

impl SphereWorld {
    pub fn new(sphere: Sphere, agent_radius: f32) -> Self {
        Self {
            sphere,
            agent_radius,
        }
    }

    /// Sphere center
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.sphere.center
    }

    /// Minimum allowed distance from the center for the agent's center.
    #[inline]
    pub fn surface_radius(&self) -> f32 {
        self.sphere.radius + self.agent_radius
    }

    /// Height of the agent's center above its resting distance.
    pub fn agent_height(&self, position: Vec3) -> f32 {
        self.sphere.distance_from_center(position) - self.surface_radius()
    }

    /// Spawn point for an agent resting on the surface along `up0`.
    pub fn spawn_position(&self, up0: Vec3) -> Vec3 {
        let up = local_up(self.sphere.center + up0, self.sphere.center);
        self.sphere.center + up * self.surface_radius()
    }
}
