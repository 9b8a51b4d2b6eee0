//! Player Module
//!
//! Agent locomotion on the outside of a sphere.
//!
//! # Components
//!
//! - [`LocomotionState`] - Position, velocity, smoothed forward hint and jump
//!   edge detection, advanced once per frame
//!   - Radial gravity toward the sphere center
//!   - Frame-rate independent drag
//!   - Non-penetration against the sphere
//! - [`LocomotionConfig`] - Tuning for the integrator

pub mod locomotion;

pub use locomotion::{
    GRAVITY, GROUND_DRAG, GROUNDED_TOLERANCE, JUMP_IMPULSE, LocomotionConfig, LocomotionState,
    MOVE_ACCELERATION, STEER_RATE, StepEvents,
};
