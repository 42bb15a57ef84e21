//! Input mapping from raw events to application actions
//!
//! Speed, color and pause keys are NOT mapped here - they go directly to the
//! ViewerController. This mapper handles the window-level keys only.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions that act on the application rather than the viewer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Start the rotation over from zero angles (R key)
    ResetRotation,
}

/// Maps raw input events to application actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for application keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyR => Some(InputAction::ResetRotation),
            _ => None,
        }
    }
}
