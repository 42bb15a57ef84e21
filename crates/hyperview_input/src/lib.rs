//! Viewer Input Handling
//!
//! This crate maps keyboard input onto the two values the viewer feeds its
//! pipeline every frame: a rotation speed and a display color. Mouse drag and
//! scroll move the view camera around the projected shape.

mod orbit_controller;
mod speed;
mod viewer_controller;

pub use orbit_controller::{OrbitControl, OrbitController};
pub use speed::SpeedSetting;
pub use viewer_controller::ViewerController;
