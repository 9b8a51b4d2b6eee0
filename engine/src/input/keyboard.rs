//! Keyboard Input Module
//!
//! Tracks the keys that drive the agent and turns them into an
//! [`InputSample`] once per frame. Key codes are the engine's own; winit
//! key events convert into them at the window boundary.

use glam::Vec2;
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::KeyW => KeyCode::W,
            WinitKeyCode::KeyA => KeyCode::A,
            WinitKeyCode::KeyS => KeyCode::S,
            WinitKeyCode::KeyD => KeyCode::D,
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
            WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
            WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
            WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
            WinitKeyCode::Escape => KeyCode::Escape,
            _ => KeyCode::Unknown,
        }
    }
}

impl From<PhysicalKey> for KeyCode {
    fn from(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(code) => code.into(),
            PhysicalKey::Unidentified(_) => KeyCode::Unknown,
        }
    }
}

/// One frame's worth of agent input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// x = right (+1) / left (-1), y = forward (+1) / back (-1).
    /// Components are in [-1, 1] and the vector is not normalized.
    pub move_axis: Vec2,
    /// Jump key is currently held
    pub jump_down: bool,
    /// Exit requested
    pub exit: bool,
}

impl InputSample {
    /// Idle sample: no movement, no jump.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Sample with the given movement axes.
    pub fn moving(right: f32, forward: f32) -> Self {
        Self {
            move_axis: Vec2::new(right.clamp(-1.0, 1.0), forward.clamp(-1.0, 1.0)),
            ..Self::default()
        }
    }

    /// Same sample with the jump key held.
    pub fn with_jump(mut self) -> Self {
        self.jump_down = true;
        self
    }
}

/// Tracks the current state of movement keys.
///
/// WASD and the arrow keys are tracked separately so releasing one does not
/// cancel the other while both are held.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - move left (strafe)
    pub left: bool,
    /// D key - move right (strafe)
    pub right: bool,
    pub arrow_up: bool,
    pub arrow_down: bool,
    pub arrow_left: bool,
    pub arrow_right: bool,
    /// Space - jump (edge-triggered by the locomotion step)
    pub jump: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let slot = match key {
            KeyCode::W => &mut self.forward,
            KeyCode::S => &mut self.backward,
            KeyCode::A => &mut self.left,
            KeyCode::D => &mut self.right,
            KeyCode::ArrowUp => &mut self.arrow_up,
            KeyCode::ArrowDown => &mut self.arrow_down,
            KeyCode::ArrowLeft => &mut self.arrow_left,
            KeyCode::ArrowRight => &mut self.arrow_right,
            KeyCode::Space => &mut self.jump,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward_axis() != 0 || self.right_axis() != 0 || self.jump
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        ((self.forward || self.arrow_up) as i32) - ((self.backward || self.arrow_down) as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        ((self.right || self.arrow_right) as i32) - ((self.left || self.arrow_left) as i32)
    }
}

/// Complete keyboard state tracking.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
    /// Escape was pressed
    pub exit_requested: bool,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::Escape {
            if pressed {
                self.exit_requested = true;
            }
            return true;
        }
        self.movement.handle_key(key, pressed)
    }

    /// Snapshot the current keys as an [`InputSample`].
    pub fn sample(&self) -> InputSample {
        InputSample {
            move_axis: Vec2::new(
                self.movement.right_axis() as f32,
                self.movement.forward_axis() as f32,
            ),
            jump_down: self.movement.jump,
            exit: self.exit_requested,
        }
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
    }

    #[test]
    fn test_movement_keys_forward() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.forward);
        assert!(keys.any_pressed());
        assert_eq!(keys.forward_axis(), 1);
    }

    #[test]
    fn test_movement_axes() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::S, true);
        // Both pressed cancels out
        assert_eq!(keys.forward_axis(), 0);

        keys.handle_key(KeyCode::D, true);
        assert_eq!(keys.right_axis(), 1);

        keys.handle_key(KeyCode::ArrowLeft, true);
        assert_eq!(keys.right_axis(), 0);
    }

    #[test]
    fn test_arrows_and_wasd_overlap() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::ArrowUp, true);
        keys.handle_key(KeyCode::W, false);
        assert_eq!(keys.forward_axis(), 1);
    }

    #[test]
    fn test_non_movement_key() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Unknown, true));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_sample_is_not_normalized() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::W, true);
        keyboard.handle_key(KeyCode::D, true);
        let sample = keyboard.sample();
        assert_eq!(sample.move_axis, Vec2::new(1.0, 1.0));
        assert!(!sample.jump_down);
    }

    #[test]
    fn test_jump_and_exit() {
        let mut keyboard = KeyboardState::new();
        keyboard.handle_key(KeyCode::Space, true);
        assert!(keyboard.sample().jump_down);
        keyboard.handle_key(KeyCode::Space, false);
        assert!(!keyboard.sample().jump_down);

        assert!(keyboard.handle_key(KeyCode::Escape, true));
        assert!(keyboard.sample().exit);
    }

    #[test]
    fn test_winit_keys_convert() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::Unknown);
        assert_eq!(
            KeyCode::from(PhysicalKey::Code(WinitKeyCode::Space)),
            KeyCode::Space
        );

        let mut keyboard = KeyboardState::new();
        assert!(keyboard.handle_key(PhysicalKey::Code(WinitKeyCode::KeyD).into(), true));
        assert_eq!(keyboard.sample().move_axis.x, 1.0);
    }

    #[test]
    fn test_moving_clamps_axes() {
        let sample = InputSample::moving(3.0, -2.0).with_jump();
        assert_eq!(sample.move_axis, Vec2::new(1.0, -1.0));
        assert!(sample.jump_down);
    }
}
