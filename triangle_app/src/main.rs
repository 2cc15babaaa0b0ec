//! Vulkan bootstrap demo
//!
//! Opens an 800x600 window, creates a Vulkan instance with validated
//! extensions, and runs the event loop until the window is closed.

use vk_bootstrap::{App, BootstrapConfig};

fn main() {
    vk_bootstrap::logging::init();

    log::info!("Starting Vulkan bootstrap demo");

    let config = BootstrapConfig::default();

    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Application error: {}", e);
            std::process::exit(1);
        }
    };

    app.run();
}
