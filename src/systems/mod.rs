//! Application systems
//!
//! Pieces of the frame loop kept out of main.rs so they can be tested alone.

mod animation;
mod render;
mod window;

pub use animation::AnimationSystem;
pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
