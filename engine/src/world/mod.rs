//! World Module
//!
//! World geometry the core reads but never mutates: a single sphere and the
//! agent's collider radius.
//!
//! ## Default World
//! The default planetoid is 20m in radius with a 0.5m agent, small enough
//! that the surface curvature is obvious from the third-person camera.

pub mod sphere;

pub use sphere::{DEFAULT_AGENT_RADIUS, DEFAULT_SPHERE_RADIUS, Sphere, SphereWorld};
