//! Input Module
//!
//! Platform-agnostic input for the agent. A window layer feeds key events
//! into [`KeyboardState`]; the headless simulator uses [`ScriptedInput`]
//! instead. Both produce one [`InputSample`] per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use planetoid_engine::input::{KeyboardState, KeyCode};
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.handle_key(KeyCode::W, true); // W pressed
//! let sample = keyboard.sample();
//! assert_eq!(sample.move_axis.y, 1.0);
//! ```

pub mod keyboard;
pub mod script;

// Re-export commonly used types at module level
pub use keyboard::{InputSample, KeyCode, KeyboardState, MovementKeys};
pub use script::{ScriptSegment, ScriptedInput};
