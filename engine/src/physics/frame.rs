//! Tangent Frame
//!
//! Derives the local `{up, forward, right}` basis on the tangent plane of the
//! sphere at the agent's position. The frame is recomputed from scratch every
//! frame; nothing here caches orientation.
//!
//! # Degenerate Inputs
//!
//! Every normalization is epsilon-gated and falls back to a fixed direction,
//! so the functions in this module never return a zero or NaN vector:
//!
//! - `up` falls back to [`DEFAULT_UP`] when the position sits on the center
//! - `forward` falls back to [`WORLD_FORWARD`] (then [`WORLD_RIGHT`]) projected
//!   onto the tangent plane when the hint is parallel to `up`
//! - `right` falls back to any unit vector orthogonal to `up`

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Squared-length threshold below which a vector is treated as degenerate.
pub const DEGENERATE_EPSILON_SQ: f32 = 1e-8;

/// Up direction used when a position coincides with the sphere center.
pub const DEFAULT_UP: Vec3 = Vec3::Y;

/// Reference forward direction (camera yaw 0 looks toward -Z).
pub const WORLD_FORWARD: Vec3 = Vec3::NEG_Z;

/// Reference right direction, used when [`WORLD_FORWARD`] is parallel to up.
pub const WORLD_RIGHT: Vec3 = Vec3::X;

/// Reference tick the drag law is calibrated against (Hz).
pub const DRAG_REFERENCE_HZ: f32 = 60.0;

/// Orthonormal basis on the tangent plane at a point of the sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentFrame {
    /// Surface normal (away from the sphere center)
    pub up: Vec3,
    /// Movement/camera forward, tangent to the surface
    pub forward: Vec3,
    /// `forward × up`, tangent to the surface
    pub right: Vec3,
}

/// Normalizes `v`, or returns `None` when it is too short to normalize safely.
#[inline]
pub fn try_unit(v: Vec3) -> Option<Vec3> {
    let len_sq = v.length_squared();
    if len_sq > DEGENERATE_EPSILON_SQ && len_sq.is_finite() {
        Some(v / len_sq.sqrt())
    } else {
        None
    }
}

/// Removes the component of `v` along the unit vector `normal`.
#[inline]
pub fn project_on_plane(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * v.dot(normal)
}

/// Local up at `position`: the unit direction from `center` to `position`.
pub fn local_up(position: Vec3, center: Vec3) -> Vec3 {
    try_unit(position - center).unwrap_or(DEFAULT_UP)
}

/// Projects `hint` onto the tangent plane of `up` and normalizes it.
///
/// Falls back to the projected world-forward constant, then the projected
/// world-right constant. `up` must be a unit vector.
pub fn tangent_direction(hint: Vec3, up: Vec3) -> Vec3 {
    try_unit(project_on_plane(hint, up))
        .or_else(|| try_unit(project_on_plane(WORLD_FORWARD, up)))
        .or_else(|| try_unit(project_on_plane(WORLD_RIGHT, up)))
        .unwrap_or_else(|| up.any_orthonormal_vector())
}

/// Computes the tangent frame at `position` on a sphere centered at `center`.
///
/// Pure and deterministic: identical inputs always give identical outputs.
pub fn compute_frame(position: Vec3, center: Vec3, forward_hint: Vec3) -> TangentFrame {
    let up = local_up(position, center);
    let forward = tangent_direction(forward_hint, up);
    let right = try_unit(forward.cross(up)).unwrap_or_else(|| up.any_orthonormal_vector());

    TangentFrame { up, forward, right }
}

/// Blend factor for exponential smoothing at `rate` per second over `dt`.
///
/// `1 - e^(-rate * dt)`: continuous in `dt`, 0 at `dt = 0`, approaching 1.
#[inline]
pub fn exp_blend_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

/// Per-second rate whose exponential blend equals `factor` at one reference tick.
///
/// Used to convert a per-frame smoothing factor tuned at 60 Hz into a
/// frame-rate independent rate.
pub fn rate_for_per_tick_factor(factor: f32) -> f32 {
    -(1.0 - factor.clamp(0.0, 0.999_999)).ln() * DRAG_REFERENCE_HZ
}

/// How a per-update smoothing blend is derived from the time step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum BlendLaw {
    /// `1 - e^(-rate * dt)`: frame-rate independent
    Exponential { rate: f32 },
    /// Same factor every call regardless of `dt` (tuned at a fixed tick)
    FixedPerCall { factor: f32 },
}

impl BlendLaw {
    /// Blend factor in [0, 1] for an update of `dt` seconds.
    pub fn factor(&self, dt: f32) -> f32 {
        match *self {
            BlendLaw::Exponential { rate } => exp_blend_factor(rate, dt),
            BlendLaw::FixedPerCall { factor } => factor.clamp(0.0, 1.0),
        }
    }

    /// Exponential law equivalent to `factor` per call at the 60 Hz reference tick.
    pub fn exponential_matching(factor: f32) -> Self {
        BlendLaw::Exponential {
            rate: rate_for_per_tick_factor(factor),
        }
    }
}

/// Velocity multiplier for exponential drag over `dt` seconds.
///
/// `base^(dt * 60)`: applying it ten times at 1/60 s equals applying it once
/// at 1/6 s.
#[inline]
pub fn drag_factor(base: f32, dt: f32) -> f32 {
    base.powf(dt * DRAG_REFERENCE_HZ)
}
