// =============================================================================
// HELLO VULKAN - Minimal window + instance bootstrap
// =============================================================================
//
// This program opens a fixed-size window, creates a Vulkan instance, and
// runs the event loop until the window is closed. No rendering happens.
//
// STARTUP FLOW:
// 1. Load config.toml (or defaults)
// 2. Create the window
// 3. Verify validation layers (debug only)
// 4. Assemble required instance extensions
// 5. Create the Vulkan instance
// 6. Poll events until close is requested
//
// Every bootstrap failure is fatal: the error kind is logged, then the
// process aborts. There is no recovery path.
//
// =============================================================================

mod backend;
mod config;
mod error;
mod window;

use anyhow::Result;
use backend::VulkanInstance;
use config::Config;
use error::BootstrapError;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::Window,
};

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let config = Config::load();

    init_logging();
    log::info!("Starting Vulkan bootstrap");
    log::info!("Window: {}x{}", config.window.width, config.window.height);

    // Debug-only diagnostics are resolved to a single runtime flag here;
    // the bootstrap branches on it at the two call sites that care.
    let enable_validation = cfg!(debug_assertions) && config.debug.validation_layers;

    let event_loop = EventLoop::new()?;
    // Tight poll: no frame pacing, the loop spins until close is requested.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, enable_validation);
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.fatal.take() {
        log::error!("Fatal bootstrap error: {err}");
        std::process::abort();
    }

    Ok(())
}

fn init_logging() {
    use env_logger::Builder;
    use log::LevelFilter;

    let mut builder = Builder::from_default_env();
    builder.filter_level(LevelFilter::Info);
    builder.init();
}

// =============================================================================
// APPLICATION STATE
// =============================================================================

/// Main application struct.
///
/// The window and the Vulkan instance are owned here and dropped when the
/// event loop returns - no process-wide handles.
struct App {
    config: Config,
    enable_validation: bool,
    window: Option<Window>,
    /// Held alive for the rest of the process; nothing touches it after creation.
    #[allow(dead_code)]
    vulkan: Option<VulkanInstance>,
    /// First bootstrap failure, reported by main after the loop exits.
    fatal: Option<BootstrapError>,
}

impl App {
    fn new(config: Config, enable_validation: bool) -> Self {
        Self {
            config,
            enable_validation,
            window: None,
            vulkan: None,
            fatal: None,
        }
    }

    fn bootstrap(&mut self, event_loop: &ActiveEventLoop) -> Result<(), BootstrapError> {
        let window = window::create_window(event_loop, &self.config.window)?;
        let vulkan = VulkanInstance::new(self.enable_validation)?;

        self.window = Some(window);
        self.vulkan = Some(vulkan);

        Ok(())
    }
}

// =============================================================================
// EVENT HANDLING
// =============================================================================

impl ApplicationHandler for App {
    /// Called when the application is ready to create windows.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.bootstrap(event_loop) {
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    /// Handle window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CloseRequested = event {
            log::info!("Close requested, shutting down...");
            event_loop.exit();
        }
    }
}
