//! Hyperview - real-time rotating tesseract viewer
//!
//! Rotates a 4D hypercube through the XW, YW and ZW planes and draws its
//! perspective projection into 3D as a wireframe.
//!
//! Drag to rotate, scroll to zoom.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use hyperview::config::AppConfig;
use hyperview::input::{InputAction, InputMapper};
use hyperview::systems::{AnimationSystem, RenderError, RenderSystem, WindowSystem};
use hyperview_input::{OrbitController, ViewerController};

/// Main application state
struct App {
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    animation: AnimationSystem,
    controller: ViewerController,
    orbit: OrbitController,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let controller = ViewerController::new()
            .with_speed(config.viewer.rotation_speed)
            .with_color(config.viewer.color);
        let animation = AnimationSystem::new(config.viewer.max_frame_seconds);
        let orbit = OrbitController::new()
            .with_mouse_sensitivity(config.input.mouse_sensitivity)
            .with_zoom_factor(config.input.zoom_factor);

        log::info!(
            "Starting at {} in {}",
            controller.speed(),
            controller.color_label()
        );

        Self {
            config,
            window_system: None,
            render_system: None,
            animation,
            controller,
            orbit,
        }
    }

    fn refresh_title(&self) {
        if let Some(window_system) = &self.window_system {
            window_system.update_title(
                &self.controller.speed().to_string(),
                &self.controller.color_label(),
                self.controller.is_paused(),
            );
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleFullscreen => {
                if let Some(window_system) = &self.window_system {
                    window_system.toggle_fullscreen();
                }
            }
            InputAction::ResetRotation => self.animation.reset(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let buffers = self.animation.update(self.controller.effective_speed());

        if let Some(render_system) = &mut self.render_system {
            self.orbit.update(render_system.camera_mut());

            match render_system.render_frame(buffers, self.controller.color()) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render_system.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window_system) = &self.window_system {
            window_system.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render_system = match RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.clone(),
            &self.config.camera,
            self.config.window.vsync,
        ) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render_system.size();
        log::info!("Rendering at {}x{}", width, height);
        log::info!("Drag to rotate, scroll to zoom");

        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
        self.refresh_title();
        if let Some(window_system) = &self.window_system {
            window_system.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    } else if self.controller.process_keyboard(key, event.state) {
                        self.refresh_title();
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.orbit.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.orbit.process_scroll(lines);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Raw motion keeps orbiting when the drag leaves the window
        if let DeviceEvent::MouseMotion { delta } = event {
            self.orbit.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn init_logging(level: &str) {
    // RUST_LOG wins over the configured level
    env_logger::Builder::new()
        .parse_filters(level)
        .parse_default_env()
        .init();
}

fn main() {
    let config_result = AppConfig::load();
    let log_level = config_result
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&log_level);

    let config = config_result.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting Hyperview");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
