//! Orbit controller for the 3D view camera
//!
//! Controls:
//! - Left mouse drag: Orbit around the target
//! - Scroll wheel: Zoom toward / away from the target
//!
//! Panning is not supported; the camera always looks at its target.

use winit::event::{ElementState, MouseButton};

/// Orbit controller for handling mouse input
pub struct OrbitController {
    // Mouse state
    dragging: bool,
    pending_x: f32,
    pending_y: f32,
    pending_scroll: f32,

    // Configuration
    /// Radians of orbit per pixel of drag
    pub mouse_sensitivity: f32,
    /// Distance multiplier per scroll line toward the target
    pub zoom_factor: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            pending_x: 0.0,
            pending_y: 0.0,
            pending_scroll: 0.0,

            mouse_sensitivity: 0.005,
            zoom_factor: 0.95,
        }
    }

    /// Process mouse button input
    ///
    /// Returns `true` if the button drives the orbit.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        self.dragging = state == ElementState::Pressed;
        if !self.dragging {
            // Motion that arrives after release must not orbit
            self.pending_x = 0.0;
            self.pending_y = 0.0;
        }
        true
    }

    /// Process mouse movement in pixels; ignored unless dragging
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.dragging {
            self.pending_x += delta_x as f32;
            self.pending_y += delta_y as f32;
        }
    }

    /// Process scroll input in lines; positive scrolls toward the target
    pub fn process_scroll(&mut self, lines: f32) {
        if lines.is_finite() {
            self.pending_scroll += lines;
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply accumulated input to the camera
    ///
    /// Dragging right swings the camera left around the target and dragging
    /// down raises it, so the scene follows the pointer. Returns `true` if
    /// the camera was touched.
    pub fn update<C: OrbitControl>(&mut self, camera: &mut C) -> bool {
        let mut changed = false;

        if self.pending_x != 0.0 || self.pending_y != 0.0 {
            camera.orbit(
                -self.pending_x * self.mouse_sensitivity,
                self.pending_y * self.mouse_sensitivity,
            );
            changed = true;
        }

        if self.pending_scroll != 0.0 {
            camera.zoom(self.zoom_factor.powf(self.pending_scroll));
            changed = true;
        }

        self.pending_x = 0.0;
        self.pending_y = 0.0;
        self.pending_scroll = 0.0;
        changed
    }

    /// Builder: set mouse sensitivity
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Builder: set the per-line zoom factor
    pub fn with_zoom_factor(mut self, factor: f32) -> Self {
        self.zoom_factor = factor;
        self
    }
}

/// Trait for cameras that orbit a fixed target
pub trait OrbitControl {
    /// Swing around the target, in radians
    fn orbit(&mut self, delta_azimuth: f32, delta_elevation: f32);
    /// Multiply the distance to the target by `scale`
    fn zoom(&mut self, scale: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingCamera {
        azimuth: f32,
        elevation: f32,
        distance_scale: f32,
        zooms: u32,
    }

    impl OrbitControl for RecordingCamera {
        fn orbit(&mut self, delta_azimuth: f32, delta_elevation: f32) {
            self.azimuth += delta_azimuth;
            self.elevation += delta_elevation;
        }

        fn zoom(&mut self, scale: f32) {
            self.distance_scale = scale;
            self.zooms += 1;
        }
    }

    #[test]
    fn test_motion_without_drag_is_ignored() {
        let mut c = OrbitController::new();
        let mut camera = RecordingCamera::default();
        c.process_mouse_motion(40.0, 10.0);
        assert!(!c.update(&mut camera));
        assert_eq!(camera.azimuth, 0.0);
    }

    #[test]
    fn test_drag_orbits() {
        let mut c = OrbitController::new().with_mouse_sensitivity(0.01);
        let mut camera = RecordingCamera::default();
        assert!(c.process_mouse_button(MouseButton::Left, ElementState::Pressed));
        assert!(c.is_dragging());
        c.process_mouse_motion(10.0, 0.0);
        c.process_mouse_motion(10.0, -5.0);
        assert!(c.update(&mut camera));
        assert!((camera.azimuth + 0.2).abs() < 1e-6);
        assert!((camera.elevation + 0.05).abs() < 1e-6);

        // Input is consumed
        assert!(!c.update(&mut camera));
    }

    #[test]
    fn test_release_stops_orbit() {
        let mut c = OrbitController::new();
        let mut camera = RecordingCamera::default();
        c.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        c.process_mouse_motion(10.0, 10.0);
        c.process_mouse_button(MouseButton::Left, ElementState::Released);
        c.process_mouse_motion(10.0, 10.0);
        assert!(!c.update(&mut camera));
    }

    #[test]
    fn test_other_buttons_do_not_drag() {
        let mut c = OrbitController::new();
        assert!(!c.process_mouse_button(MouseButton::Right, ElementState::Pressed));
        assert!(!c.process_mouse_button(MouseButton::Middle, ElementState::Pressed));
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_scroll_zooms_in_and_out() {
        let mut c = OrbitController::new().with_zoom_factor(0.5);
        let mut camera = RecordingCamera::default();

        c.process_scroll(2.0);
        assert!(c.update(&mut camera));
        assert_eq!(camera.distance_scale, 0.25);

        c.process_scroll(-1.0);
        c.update(&mut camera);
        assert_eq!(camera.distance_scale, 2.0);
        assert_eq!(camera.zooms, 2);
    }

    #[test]
    fn test_non_finite_scroll_ignored() {
        let mut c = OrbitController::new();
        let mut camera = RecordingCamera::default();
        c.process_scroll(f32::NAN);
        assert!(!c.update(&mut camera));
    }
}
