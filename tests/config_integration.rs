//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hyperview::config::AppConfig;
use hyperview_core::DisplayColor;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HV_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("HV_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_viewer_section() {
    std::env::set_var("HV_VIEWER__ROTATION_SPEED", "2.5");
    std::env::set_var("HV_VIEWER__COLOR", "#ffcc00");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("HV_VIEWER__ROTATION_SPEED");
    std::env::remove_var("HV_VIEWER__COLOR");

    assert_eq!(config.viewer.rotation_speed, 2.5);
    assert_eq!(config.viewer.color, DisplayColor::GOLD);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("HV_WINDOW__TITLE");

    let config = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config")).unwrap();
    let builtin = AppConfig::default();
    assert_eq!(config.window.title, builtin.window.title);
    assert_eq!(config.camera.position, builtin.camera.position);
    assert_eq!(config.camera.fov, builtin.camera.fov);
    assert_eq!(config.viewer.color, builtin.viewer.color);
    assert_eq!(config.rendering.background_color, builtin.rendering.background_color);
    assert_eq!(config.rendering.point_size, builtin.rendering.point_size);
    assert_eq!(config.camera.max_distance, builtin.camera.max_distance);
    assert_eq!(config.input.zoom_factor, builtin.input.zoom_factor);
    assert_eq!(config.input.mouse_sensitivity, builtin.input.mouse_sensitivity);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.viewer.rotation_speed, 1.0);
}
