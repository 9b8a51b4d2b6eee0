//! Physics module
//!
//! Custom planetoid locomotion math, built without an external physics
//! library. The sphere is the only collider.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`frame`] - Tangent-plane basis, epsilon-guarded vector helpers, blend and drag laws
//! - [`collision`] - Agent-vs-sphere non-penetration

pub mod collision;
pub mod frame;

pub use collision::{ContactResolution, resolve_sphere_contact};
pub use frame::{
    BlendLaw, TangentFrame, compute_frame, drag_factor, exp_blend_factor, local_up, project_on_plane,
    tangent_direction, try_unit,
};
