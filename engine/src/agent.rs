//! Agent Pipeline
//!
//! Runs one frame of the agent in a fixed order:
//!
//! 1. Locomotion update from the frame's input
//! 2. Camera derived from the new position and forward hint
//! 3. Billboard right axis from the new camera position
//! 4. Sprite and shadow quads for the renderer
//!
//! The renderer only ever sees the returned [`FrameOutput`].

use glam::Vec3;

use crate::camera::CameraFrame;
use crate::config::PlanetoidConfig;
use crate::input::InputSample;
use crate::physics::compute_frame;
use crate::player::{LocomotionState, StepEvents};
use crate::render::{BillboardOrientation, ShadowQuad, SpriteQuad};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub agent_position: Vec3,
    pub camera: CameraFrame,
    pub sprite: SpriteQuad,
    pub shadow: ShadowQuad,
    pub events: StepEvents,
}

impl FrameOutput {
    /// Billboard right axis used for the sprite this frame.
    pub fn billboard_right(&self) -> Vec3 {
        (self.sprite.corners[1] - self.sprite.corners[0]).normalize_or_zero()
    }
}

/// A single agent with its camera and sprite state.
#[derive(Debug, Clone)]
pub struct Agent {
    config: PlanetoidConfig,
    locomotion: LocomotionState,
    billboard: BillboardOrientation,
    elapsed: f32,
    frames: u64,
}

impl Agent {
    /// Spawn at the top of the sphere (`+Y`).
    pub fn spawn(config: &PlanetoidConfig) -> Self {
        Self::spawn_at(config, Vec3::Y)
    }

    /// Spawn on the surface along `up0`.
    pub fn spawn_at(config: &PlanetoidConfig, up0: Vec3) -> Self {
        let locomotion = LocomotionState::spawn(config.world, up0, config.locomotion);
        let frame = compute_frame(
            locomotion.position(),
            config.world.center(),
            locomotion.forward_hint(),
        );

        Self {
            config: *config,
            locomotion,
            billboard: BillboardOrientation::new(frame.right),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Advance one frame of `dt` seconds.
    pub fn frame(&mut self, dt: f32, input: &InputSample) -> FrameOutput {
        let config = &self.config;
        let center = config.world.center();

        self.locomotion.update(dt, input.move_axis, input.jump_down);
        let position = self.locomotion.position();
        let hint = self.locomotion.forward_hint();

        let camera = config.camera.derive(position, hint, center);

        let right = self.billboard.advance(
            &config.billboard,
            position,
            hint,
            camera.position,
            center,
            dt,
        );

        let sprite = SpriteQuad::build(
            position,
            center,
            right,
            config.world.agent_radius,
            &config.sprite,
        );
        let shadow_params = config
            .shadow
            .shadow_params(self.locomotion.height_above_surface());
        let shadow = ShadowQuad::build(
            position,
            center,
            config.world.sphere.radius,
            right,
            shadow_params,
            &config.shadow,
        );

        self.elapsed += dt;
        self.frames += 1;

        FrameOutput {
            agent_position: position,
            camera,
            sprite,
            shadow,
            events: self.locomotion.last_step(),
        }
    }

    pub fn locomotion(&self) -> &LocomotionState {
        &self.locomotion
    }

    /// Mutable access for teleports and scripted setups.
    pub fn locomotion_mut(&mut self) -> &mut LocomotionState {
        &mut self.locomotion
    }

    pub fn billboard(&self) -> &BillboardOrientation {
        &self.billboard
    }

    pub fn config(&self) -> &PlanetoidConfig {
        &self.config
    }

    /// Simulated seconds since spawn.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Frames run since spawn.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
