//! Pointer tracking for swarm interaction.
//!
//! One `Pointer` per swarm collects cursor position and button state from
//! window events. Particles read it once per tick: the left button pulls the
//! swarm toward the cursor, the right button pushes nearby particles away.
//!
//! Button semantics are deliberately coarse for a background effect: a press
//! latches the matching flag, and *any* release clears all flags at once, so
//! a drag that ends off-window can never leave a force stuck on.

use glam::Vec2;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

/// Pointer buttons the swarm distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

impl PointerButton {
    fn from_winit(button: WinitMouseButton) -> Option<Self> {
        match button {
            WinitMouseButton::Left => Some(Self::Left),
            WinitMouseButton::Right => Some(Self::Right),
            WinitMouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

/// Latched pressed flags, read by every particle each tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub left: bool,
    pub right: bool,
    /// Tracked so releases clear it, but no press ever sets it - no gesture
    /// is bound to the middle button.
    pub middle: bool,
}

/// Current cursor position and button state.
#[derive(Debug, Default)]
pub struct Pointer {
    position: Vec2,
    buttons: ButtonState,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position in surface pixel coordinates.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    /// Record a cursor move.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Latch a button press.
    pub fn press(&mut self, button: PointerButton) {
        match button {
            PointerButton::Left => self.buttons.left = true,
            PointerButton::Right => self.buttons.right = true,
            PointerButton::Middle => {}
        }
    }

    /// Clear every flag. Called on any button release.
    pub fn release_all(&mut self) {
        self.buttons = ButtonState::default();
    }

    /// Feed a winit window event into the tracker.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_to(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => {
                    if let Some(button) = PointerButton::from_winit(*button) {
                        self.press(button);
                    }
                }
                ElementState::Released => self.release_all(),
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_latches_only_the_matching_flag() {
        let mut pointer = Pointer::new();
        pointer.press(PointerButton::Left);
        assert!(pointer.buttons().left);
        assert!(!pointer.buttons().right);

        pointer.press(PointerButton::Right);
        assert!(pointer.buttons().left && pointer.buttons().right);
    }

    #[test]
    fn test_middle_press_sets_no_flag() {
        let mut pointer = Pointer::new();
        pointer.press(PointerButton::Middle);
        assert_eq!(pointer.buttons(), ButtonState::default());
    }

    #[test]
    fn test_any_release_clears_all_flags() {
        let mut pointer = Pointer::new();
        pointer.press(PointerButton::Left);
        pointer.press(PointerButton::Right);
        pointer.release_all();
        assert_eq!(pointer.buttons(), ButtonState::default());
    }

    #[test]
    fn test_move_updates_position() {
        let mut pointer = Pointer::new();
        pointer.move_to(Vec2::new(120.0, 48.5));
        assert_eq!(pointer.position(), Vec2::new(120.0, 48.5));
    }
}
