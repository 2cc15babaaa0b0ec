//! Application lifecycle for the bootstrap
//!
//! Wires the window and instance together: `App::new` performs the full
//! bootstrap in acquisition order, `run` drives the event loop, and dropping
//! the `App` releases everything in reverse order.

use thiserror::Error;

use crate::config::BootstrapConfig;
use crate::instance::{Instance, InstanceError};
use crate::window::{Window, WindowError};

/// Bootstrap errors
///
/// Every failure here is fatal. Errors keep the message produced at their
/// origin and travel unchanged to the caller, which is expected to report
/// them and exit nonzero.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// A configuration record failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Window system bootstrap failed
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Vulkan cannot present to this window system
    #[error("Vulkan is not supported on this platform")]
    UnsupportedPlatform,

    /// Instance bootstrap failed
    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Result type for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Owns every resource the bootstrap acquires
///
/// Fields drop in declaration order: the instance is destroyed first, then
/// the window, and GLFW itself shuts down last.
pub struct App {
    instance: Instance,
    window: Window,
}

impl App {
    /// Perform the full bootstrap in acquisition order
    ///
    /// Validates the configuration, creates the window, checks that the
    /// platform can present Vulkan at all, then creates the instance. Fails
    /// on the first error; anything acquired before the failure is released
    /// before this returns.
    pub fn new(config: &BootstrapConfig) -> BootstrapResult<Self> {
        config.validate().map_err(BootstrapError::InvalidConfig)?;

        log::info!(
            "Creating {}x{} window \"{}\"",
            config.window.width,
            config.window.height,
            config.window.title
        );
        let window = Window::new(&config.window)?;
        log::debug!("Window reports size {:?}", window.size());

        if !window.vulkan_supported() {
            return Err(BootstrapError::UnsupportedPlatform);
        }
        let windowing_extensions = window
            .required_instance_extensions()
            .ok_or(BootstrapError::UnsupportedPlatform)?;
        log::debug!("Window system requires extensions: {:?}", windowing_extensions);

        let instance = Instance::new(&config.application, &windowing_extensions)?;

        Ok(Self { instance, window })
    }

    /// Poll events until the user closes the window
    ///
    /// The poll never blocks; no per-frame work happens at this stage.
    pub fn run(&mut self) {
        log::info!("Entering event loop");
        while !self.window.should_close() {
            self.window.poll_events();
        }
        log::info!("Window close requested, shutting down");
    }

    /// The Vulkan instance created by the bootstrap
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// The window created by the bootstrap
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Mutable window access for embedders that drive the loop themselves
    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowConfig;

    #[test]
    fn test_invalid_config_fails_before_any_resource_is_acquired() {
        let config = BootstrapConfig {
            window: WindowConfig::new("Test").with_size(0, 0),
            ..Default::default()
        };
        let result = App::new(&config);
        assert!(matches!(result, Err(BootstrapError::InvalidConfig(_))));
    }

    #[test]
    fn test_window_errors_pass_through_unchanged() {
        let original = WindowError::InitializationFailed.to_string();
        let wrapped = BootstrapError::from(WindowError::InitializationFailed);
        assert_eq!(wrapped.to_string(), original);
    }

    #[test]
    fn test_instance_errors_pass_through_unchanged() {
        let missing = InstanceError::MissingExtensions(vec!["VK_KHR_surface".to_string()]);
        let original = missing.to_string();
        let wrapped = BootstrapError::from(missing);
        assert_eq!(wrapped.to_string(), original);
    }

    #[test]
    fn test_unsupported_platform_message() {
        assert_eq!(
            BootstrapError::UnsupportedPlatform.to_string(),
            "Vulkan is not supported on this platform"
        );
    }
}
