//! Hyperview - real-time rotating tesseract viewer
//!
//! This library exposes the application-level modules so they can be
//! exercised by integration tests and demos.

pub mod config;
pub mod input;
pub mod systems;
