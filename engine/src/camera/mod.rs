//! Camera Module
//!
//! Derives the third-person camera from the agent's state.
//! This module is window-system agnostic - it only deals with camera math.

pub mod orbital;

pub use orbital::{
    CameraFrame, FLOOR_ANGLE_DEGREES, HORIZONTAL_DISTANCE, LOOK_AHEAD_DISTANCE, OrbitalCamera,
    derive_camera,
};
