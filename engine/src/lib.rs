//! Planetoid Engine Library
//!
//! Third-person locomotion on a small spherical world. An agent walks on the
//! outside of a sphere under radial gravity, a camera trails it using the
//! local surface normal as "up", and a camera-facing sprite is kept from
//! mirroring as the view swings around.
//!
//! The library is renderer and window-system agnostic: it consumes an
//! [`InputSample`] per frame and produces plain geometry in a [`FrameOutput`].
//!
//! # Modules
//!
//! - [`world`] - Sphere geometry and the agent collider radius
//! - [`physics`] - Tangent frames, blend laws, drag and sphere contact
//! - [`player`] - Per-frame locomotion integrator
//! - [`camera`] - Orbital third-person camera
//! - [`render`] - Billboard orientation, sprite and shadow quads
//! - [`input`] - Keyboard state and scripted input timelines
//! - [`config`] - JSON configuration with validation
//! - [`agent`] - The per-frame pipeline tying the above together
//! - [`logging`] - `env_logger` setup
//!
//! # Example
//!
//! ```ignore
//! use planetoid_engine::{Agent, PlanetoidConfig};
//! use planetoid_engine::input::{KeyboardState, KeyCode};
//!
//! let config = PlanetoidConfig::load("planetoid.json")?;
//! let mut agent = Agent::spawn(&config);
//! let mut keyboard = KeyboardState::new();
//!
//! // Window layer forwards key events
//! keyboard.handle_key(KeyCode::W, true);
//!
//! // Each frame:
//! let out = agent.frame(delta_time, &keyboard.sample());
//! renderer.set_view(out.camera.view_matrix());
//! renderer.draw_sprite(&out.sprite.vertices());
//! renderer.draw_shadow(&out.shadow.vertices());
//! ```

pub mod agent;
pub mod camera;
pub mod config;
pub mod input;
pub mod logging;
pub mod physics;
pub mod player;
pub mod render;
pub mod world;

// Re-export the pipeline entry points at crate level
pub use agent::{Agent, FrameOutput};
pub use config::{ConfigError, PlanetoidConfig};
// Re-export world types for convenience
pub use world::{Sphere, SphereWorld};
// Re-export commonly used input types
pub use input::{InputSample, KeyCode, KeyboardState, ScriptedInput};
// Re-export player types
pub use player::{LocomotionConfig, LocomotionState, StepEvents};
