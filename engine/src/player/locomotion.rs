//! Planetoid Locomotion
//!
//! Per-frame movement integrator for an agent walking on the outside of a
//! sphere under radial gravity.
//!
//! # Physics Model
//!
//! - Move input accelerates the agent along the tangent plane (no speed cap)
//! - Gravity: 45 m/s² toward the sphere center
//! - Jump: a single radial impulse on the rising edge of the jump key
//! - Drag: `0.985^(dt * 60)` applied to the whole velocity every update
//! - Explicit Euler integration, then non-penetration against the sphere
//!
//! The tangent frame is rebuilt from the current position every update, so
//! "up" follows the agent around the sphere.
//!
//! # Usage
//!
//! ```rust,ignore
//! use planetoid_engine::player::{LocomotionConfig, LocomotionState};
//! use planetoid_engine::world::SphereWorld;
//! use glam::{Vec2, Vec3};
//!
//! let world = SphereWorld::default();
//! let mut state = LocomotionState::spawn(world, Vec3::Y, LocomotionConfig::default());
//!
//! // Each frame:
//! state.update(delta_time, Vec2::new(0.0, 1.0), jump_key_down);
//! renderer.draw_agent(state.position());
//! ```

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::physics::collision::resolve_sphere_contact;
use crate::physics::frame::{BlendLaw, WORLD_FORWARD, compute_frame, drag_factor, try_unit};
use crate::world::SphereWorld;

/// Acceleration along the tangent plane while a move key is held (m/s²)
pub const MOVE_ACCELERATION: f32 = 12.0;

/// Radial gravity toward the sphere center (m/s²)
pub const GRAVITY: f32 = 45.0;

/// Radial velocity added on jump (m/s)
pub const JUMP_IMPULSE: f32 = 14.0;

/// Velocity retained per 60 Hz reference tick
pub const GROUND_DRAG: f32 = 0.985;

/// Distance above the surface radius still counted as grounded (m)
pub const GROUNDED_TOLERANCE: f32 = 0.05;

/// Rate at which the forward hint turns toward the move direction (1/s)
pub const STEER_RATE: f32 = 6.0;

/// Squared length below which move input is ignored
const MOVE_INPUT_THRESHOLD_SQ: f32 = 1e-4;

/// Tuning for the locomotion integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Tangential acceleration in m/s²
    pub move_acceleration: f32,
    /// Gravity acceleration in m/s²
    pub gravity: f32,
    /// Jump impulse in m/s along local up
    pub jump_impulse: f32,
    /// Drag base, applied as `ground_drag^(dt * 60)`
    pub ground_drag: f32,
    /// Grounded tolerance above the surface radius in meters
    pub grounded_tolerance: f32,
    /// Blend law steering the forward hint toward the move direction
    pub steer_blend: BlendLaw,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_acceleration: MOVE_ACCELERATION,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            ground_drag: GROUND_DRAG,
            grounded_tolerance: GROUNDED_TOLERANCE,
            steer_blend: BlendLaw::Exponential { rate: STEER_RATE },
        }
    }
}

/// What the most recent [`LocomotionState::update`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Agent was within the grounded tolerance before integrating
    pub grounded: bool,
    /// A jump impulse was applied
    pub jumped: bool,
    /// The collision clamp fired
    pub clamped: bool,
}

/// Agent locomotion state on a sphere.
///
/// Owns position, velocity, the smoothed forward hint, and the previous jump
/// key state used for edge detection.
#[derive(Debug, Clone)]
pub struct LocomotionState {
    /// Agent center in world space
    position: Vec3,
    /// Velocity in world space (m/s)
    velocity: Vec3,
    /// Smoothed movement/camera forward (unit length)
    forward_hint: Vec3,
    /// Jump key state at the previous update
    previous_jump_key_down: bool,
    /// World the agent walks on
    world: SphereWorld,
    /// Integrator tuning
    config: LocomotionConfig,
    /// Events from the most recent update
    last_step: StepEvents,
}

impl LocomotionState {
    /// Spawn an agent at rest on the surface along `up0`.
    pub fn spawn(world: SphereWorld, up0: Vec3, config: LocomotionConfig) -> Self {
        let position = world.spawn_position(up0);
        let forward_hint = compute_frame(position, world.center(), WORLD_FORWARD).forward;
        log::debug!(
            "spawned agent at {:?} (surface radius {:.3})",
            position,
            world.surface_radius()
        );

        Self {
            position,
            velocity: Vec3::ZERO,
            forward_hint,
            previous_jump_key_down: false,
            world,
            config,
            last_step: StepEvents::default(),
        }
    }

    /// Agent center in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current speed (magnitude of velocity).
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Smoothed forward direction, unit length.
    pub fn forward_hint(&self) -> Vec3 {
        self.forward_hint
    }

    /// World the agent walks on.
    pub fn world(&self) -> &SphereWorld {
        &self.world
    }

    /// Integrator tuning.
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Events from the most recent update.
    pub fn last_step(&self) -> StepEvents {
        self.last_step
    }

    /// Height of the agent's center above its resting distance.
    pub fn height_above_surface(&self) -> f32 {
        self.world.agent_height(self.position)
    }

    /// Whether the agent is within the grounded tolerance of the surface.
    pub fn is_grounded(&self) -> bool {
        self.height_above_surface() <= self.config.grounded_tolerance
    }

    /// Set position and velocity directly (e.g. for teleportation).
    ///
    /// The next update resolves any penetration.
    pub fn teleport(&mut self, position: Vec3, velocity: Vec3) {
        self.position = position;
        self.velocity = velocity;
    }

    /// Replace the forward hint; ignored when `hint` is degenerate.
    pub fn set_forward_hint(&mut self, hint: Vec3) {
        if let Some(unit) = try_unit(hint) {
            self.forward_hint = unit;
        }
    }

    /// Advance the agent by `dt` seconds.
    ///
    /// # Arguments
    /// * `dt` - Time step in seconds, must be non-negative
    /// * `move_input` - (right, forward) axis values in [-1, 1]
    /// * `jump_key_down` - Current jump key state
    pub fn update(&mut self, dt: f32, move_input: Vec2, jump_key_down: bool) {
        debug_assert!(dt >= 0.0, "negative time step {dt}");
        let center = self.world.center();
        let mut events = StepEvents::default();

        let frame = compute_frame(self.position, center, self.forward_hint);

        let desired_move = frame.forward * move_input.y + frame.right * move_input.x;
        if desired_move.length_squared() > MOVE_INPUT_THRESHOLD_SQ {
            let desired_move = desired_move.normalize();
            self.velocity += desired_move * self.config.move_acceleration * dt;

            let blend = self.config.steer_blend.factor(dt);
            let steered = self.forward_hint.lerp(desired_move, blend);
            self.forward_hint = try_unit(steered).unwrap_or(desired_move);
        }

        self.velocity -= frame.up * self.config.gravity * dt;

        events.grounded = self.is_grounded();

        let jump_edge = jump_key_down && !self.previous_jump_key_down;
        if jump_edge && events.grounded {
            self.velocity += frame.up * self.config.jump_impulse;
            events.jumped = true;
            log::debug!("jump at {:?}", self.position);
        }
        self.previous_jump_key_down = jump_key_down;

        self.velocity *= drag_factor(self.config.ground_drag, dt);

        self.position += self.velocity * dt;

        let contact = resolve_sphere_contact(
            self.position,
            self.velocity,
            center,
            self.world.surface_radius(),
        );
        self.position = contact.position;
        self.velocity = contact.velocity;
        events.clamped = contact.clamped;
        if events.clamped && !events.grounded {
            log::debug!("landed at {:?}", self.position);
        }

        self.last_step = events;
        log::trace!(
            "locomotion step dt={dt:.4} pos={:?} vel={:?} {:?}",
            self.position,
            self.velocity,
            events
        );
    }
}
