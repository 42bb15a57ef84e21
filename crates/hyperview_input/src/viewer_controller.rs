//! Keyboard controller standing in for the viewer's speed slider and color buttons
//!
//! Controls:
//! - Up / `=`: Faster (+0.1x)
//! - Down / `-`: Slower (−0.1x)
//! - 1-5: Pick a palette color
//! - C: Next palette color
//! - Space: Pause / resume

use hyperview_core::{DisplayColor, PALETTE};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::SpeedSetting;

/// Viewer controller for handling speed and color input
pub struct ViewerController {
    speed: SpeedSetting,
    color: DisplayColor,
    paused: bool,
}

impl Default for ViewerController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerController {
    pub fn new() -> Self {
        Self {
            speed: SpeedSetting::DEFAULT,
            color: DisplayColor::default(),
            paused: false,
        }
    }

    /// Set the starting speed (snapped to the controls' range and step)
    pub fn with_speed(mut self, multiplier: f32) -> Self {
        self.speed = SpeedSetting::from_multiplier(multiplier);
        self
    }

    /// Set the starting color
    ///
    /// Any color is accepted, not only palette entries.
    pub fn with_color(mut self, color: DisplayColor) -> Self {
        self.color = color;
        self
    }

    /// Process keyboard input
    ///
    /// Returns `true` if the key was handled.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        if state != ElementState::Pressed {
            // Still claim our keys so releases are not passed on
            return Self::is_control_key(key);
        }

        match key {
            KeyCode::ArrowUp | KeyCode::Equal | KeyCode::NumpadAdd => {
                self.speed = self.speed.increase();
                log::info!("Rotation speed: {}", self.speed);
                true
            }
            KeyCode::ArrowDown | KeyCode::Minus | KeyCode::NumpadSubtract => {
                self.speed = self.speed.decrease();
                log::info!("Rotation speed: {}", self.speed);
                true
            }
            KeyCode::Digit1 => { self.select_palette(0); true }
            KeyCode::Digit2 => { self.select_palette(1); true }
            KeyCode::Digit3 => { self.select_palette(2); true }
            KeyCode::Digit4 => { self.select_palette(3); true }
            KeyCode::Digit5 => { self.select_palette(4); true }
            KeyCode::KeyC => { self.cycle_color(); true }
            KeyCode::Space => {
                self.toggle_pause();
                true
            }
            _ => false,
        }
    }

    fn is_control_key(key: KeyCode) -> bool {
        matches!(
            key,
            KeyCode::ArrowUp
                | KeyCode::Equal
                | KeyCode::NumpadAdd
                | KeyCode::ArrowDown
                | KeyCode::Minus
                | KeyCode::NumpadSubtract
                | KeyCode::Digit1
                | KeyCode::Digit2
                | KeyCode::Digit3
                | KeyCode::Digit4
                | KeyCode::Digit5
                | KeyCode::KeyC
                | KeyCode::Space
        )
    }

    fn select_palette(&mut self, index: usize) {
        if let Some(entry) = PALETTE.get(index) {
            self.color = entry.color;
            log::info!("Color: {} ({})", entry.name, entry.color);
        }
    }

    /// Move to the next palette color
    ///
    /// A color outside the palette moves to the first entry.
    pub fn cycle_color(&mut self) {
        let next = PALETTE
            .iter()
            .position(|entry| entry.color == self.color)
            .map(|i| (i + 1) % PALETTE.len())
            .unwrap_or(0);
        self.select_palette(next);
    }

    /// Toggle pause; returns the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("Rotation {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    /// Speed to pass to the pipeline this frame (zero while paused)
    pub fn effective_speed(&self) -> f32 {
        if self.paused {
            0.0
        } else {
            self.speed.multiplier()
        }
    }

    #[inline]
    pub fn speed(&self) -> SpeedSetting {
        self.speed
    }

    #[inline]
    pub fn color(&self) -> DisplayColor {
        self.color
    }

    /// Palette name of the current color, or its hex code
    pub fn color_label(&self) -> String {
        self.color
            .palette_entry()
            .map(|entry| entry.name.to_string())
            .unwrap_or_else(|| self.color.to_hex())
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
